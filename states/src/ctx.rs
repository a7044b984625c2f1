use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

use crate::runtime::CommandRuntime;
use crate::snapshot::{ComputeSnapshot, StateSnapshot};
use crate::updater::UpdateMsg;
use crate::{
    Command, CommandSnapshot, Compute, Dep, Graph, LatestOnlyUpdater, State, TaskHandle, TaskId,
    Updater,
};

enum Slot {
    State(Box<dyn State>),
    Compute(Box<dyn Compute>),
}

impl Slot {
    fn as_any(&self) -> &dyn Any {
        match self {
            Slot::State(state) => state.as_any(),
            Slot::Compute(compute) => compute.as_any(),
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        match self {
            Slot::State(state) => state.as_any_mut(),
            Slot::Compute(compute) => compute.as_any_mut(),
        }
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        match self {
            Slot::State(state) => state.snapshot(),
            Slot::Compute(compute) => compute.snapshot(),
        }
    }

    fn assign_box(&mut self, value: Box<dyn Any + Send>) {
        match self {
            Slot::State(state) => state.assign_box(value),
            Slot::Compute(compute) => compute.assign_box(value),
        }
    }
}

struct CommandEntry {
    command: Box<dyn Command>,
    latest: Arc<AtomicU64>,
    generation: u64,
    handle: Option<TaskHandle>,
}

/// Single-threaded owner of every registered state, compute and command.
///
/// All mutation happens on the owning (UI) thread: either directly through
/// `state_mut`/`update`, or by applying values published over the internal
/// channel during `sync_computes()`. Async command futures never touch live
/// state; they get a snapshot in and an updater out.
pub struct StateCtx {
    storage: BTreeMap<TypeId, Slot>,
    graph: Graph<TypeId>,
    compute_order: Vec<TypeId>,
    dirty: BTreeSet<TypeId>,
    commands: BTreeMap<TypeId, CommandEntry>,
    queued: Vec<TypeId>,
    send: flume::Sender<UpdateMsg>,
    recv: flume::Receiver<UpdateMsg>,
    runtime: CommandRuntime,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            storage: BTreeMap::new(),
            graph: Graph::new(),
            compute_order: Vec::new(),
            dirty: BTreeSet::new(),
            commands: BTreeMap::new(),
            queued: Vec::new(),
            send,
            recv,
            runtime: CommandRuntime::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.storage.insert(id, Slot::State(Box::new(state)));
        self.mark_dependents_dirty(id);
    }

    /// Register a compute. Its dependencies are wired into the graph and it
    /// is marked dirty so it runs on the first `sync_computes()`.
    ///
    /// # Panics
    /// Panics when the declared dependencies introduce a cycle.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (state_deps, compute_deps) = compute.deps();
        for dep in state_deps.iter().chain(compute_deps) {
            self.graph.route_to(*dep, id);
        }
        self.storage.insert(id, Slot::Compute(Box::new(compute)));
        self.dirty.insert(id);
        self.rebuild_compute_order();
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(
            TypeId::of::<C>(),
            CommandEntry {
                command: Box::new(command),
                latest: Arc::new(AtomicU64::new(0)),
                generation: 0,
                handle: None,
            },
        );
    }

    /// # Panics
    /// Panics when `T` was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.storage
            .get(&TypeId::of::<T>())
            .map(Slot::as_any)
            .and_then(|any| any.downcast_ref::<T>())
            .unwrap_or_else(|| panic!("StateCtx: state {} not registered", type_name::<T>()))
    }

    /// Mutable access to a state. Dependent computes are marked dirty
    /// pessimistically, before the caller decides whether to mutate.
    ///
    /// # Panics
    /// Panics when `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.mark_dependents_dirty(id);
        self.storage
            .get_mut(&id)
            .map(Slot::as_any_mut)
            .and_then(|any| any.downcast_mut::<T>())
            .unwrap_or_else(|| panic!("StateCtx: state {} not registered", type_name::<T>()))
    }

    /// Mutate a registered state or compute-shaped cache in place.
    ///
    /// # Panics
    /// Panics when `T` was never registered.
    pub fn update<T: Any>(&mut self, f: impl FnOnce(&mut T)) {
        let id = TypeId::of::<T>();
        let slot = self
            .storage
            .get_mut(&id)
            .unwrap_or_else(|| panic!("StateCtx: {} not registered", type_name::<T>()));
        let value = slot
            .as_any_mut()
            .downcast_mut::<T>()
            .unwrap_or_else(|| panic!("StateCtx: {} has unexpected type", type_name::<T>()));
        f(value);
        self.mark_dependents_dirty(id);
    }

    /// Latest computed value of a compute, or `None` when not registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|slot| match slot {
                Slot::Compute(compute) => compute.as_any().downcast_ref::<T>(),
                Slot::State(_) => None,
            })
    }

    /// Queue a command for the end-of-frame flush (`run_computed`).
    /// Queuing the same command type twice within a frame collapses into
    /// one dispatch.
    pub fn enqueue_command<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        if !self.queued.contains(&id) {
            self.queued.push(id);
        }
    }

    /// Dispatch a command immediately, cancelling any in-flight run of the
    /// same command type.
    pub fn dispatch<C: Command>(&mut self) {
        self.spawn_command(TypeId::of::<C>());
    }

    /// Flush commands enqueued during the frame. Call at end of frame.
    pub fn run_computed(&mut self) {
        let queued = std::mem::take(&mut self.queued);
        for id in queued {
            self.spawn_command(id);
        }
    }

    /// Apply pending async results, then recompute dirty computes in
    /// dependency order. Updates published by a compute are applied before
    /// the next compute in the order runs, so downstream computes always
    /// observe fresh upstream values within one call.
    pub fn sync_computes(&mut self) {
        self.drain_updates();

        let order = self.compute_order.clone();
        for id in order {
            if !self.dirty.remove(&id) {
                continue;
            }
            // Take the slot out so the Dep view can borrow the rest of the
            // storage while the compute runs.
            let Some(slot) = self.storage.remove(&id) else {
                continue;
            };
            if let Slot::Compute(compute) = &slot {
                let (state_deps, compute_deps) = compute.deps();
                let dep = Dep::new(state_deps.iter().chain(compute_deps).filter_map(|dep_id| {
                    self.storage
                        .get(dep_id)
                        .map(|dep_slot| (*dep_id, dep_slot.as_any()))
                }));
                compute.compute(dep, Updater::new(self.send.clone()));
            }
            self.storage.insert(id, slot);
            self.drain_updates();
        }
    }

    fn rebuild_compute_order(&mut self) {
        let mut order = self
            .graph
            .topology_sort()
            .expect("compute dependency cycle detected");
        // Computes with an empty dependency list never appear in the graph
        // but still need a place in the order for their initial run.
        for (id, slot) in &self.storage {
            if matches!(slot, Slot::Compute(_)) && !order.contains(id) {
                order.push(*id);
            }
        }
        self.compute_order = order;
    }

    fn drain_updates(&mut self) {
        while let Ok((id, value)) = self.recv.try_recv() {
            self.apply_update(id, value);
        }
    }

    fn apply_update(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        match self.storage.get_mut(&id) {
            Some(slot) => {
                slot.assign_box(value);
                self.mark_dependents_dirty(id);
            }
            None => log::warn!("StateCtx: dropping update for unregistered type {id:?}"),
        }
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        for dependent in self.graph.dependents_of(id) {
            if matches!(self.storage.get(&dependent), Some(Slot::Compute(_))) {
                self.dirty.insert(dependent);
            }
        }
    }

    fn spawn_command(&mut self, id: TypeId) {
        let snapshot = self.snapshot();
        let Some(entry) = self.commands.get_mut(&id) else {
            log::error!("StateCtx: dispatch of unregistered command {id:?}");
            return;
        };

        // Supersede any in-flight run: cancel it and bump the shared
        // generation so its late results are dropped by the updater.
        if let Some(handle) = entry.handle.take() {
            handle.cancel();
        }
        entry.generation += 1;
        entry.latest.store(entry.generation, Ordering::Release);

        let token = CancellationToken::new();
        entry.handle = Some(TaskHandle::new(
            TaskId::new(id, entry.generation),
            token.clone(),
        ));
        let updater = LatestOnlyUpdater::new(
            Updater::new(self.send.clone()),
            entry.generation,
            entry.latest.clone(),
        );

        let fut = entry.command.run(snapshot, updater, token);
        self.runtime.spawn(fut);
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut states = StateSnapshot::default();
        let mut computes = ComputeSnapshot::default();
        for (id, slot) in &self.storage {
            if let Some(boxed) = slot.snapshot() {
                match slot {
                    Slot::State(_) => states.insert(*id, boxed),
                    Slot::Compute(_) => computes.insert(*id, boxed),
                }
            }
        }
        CommandSnapshot::new(states, computes)
    }
}
