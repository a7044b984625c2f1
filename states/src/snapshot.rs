use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Compute, State};

#[derive(Default)]
pub struct StateSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl StateSnapshot {
    pub(crate) fn insert(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: State>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }
}

#[derive(Default)]
pub struct ComputeSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl ComputeSnapshot {
    pub(crate) fn insert(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: Compute>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }
}

/// Owned copies of registered states/computes, taken at command dispatch
/// time. Commands read their inputs here instead of touching live state.
#[derive(Default)]
pub struct CommandSnapshot {
    states: StateSnapshot,
    computes: ComputeSnapshot,
}

impl CommandSnapshot {
    pub(crate) fn new(states: StateSnapshot, computes: ComputeSnapshot) -> Self {
        Self { states, computes }
    }

    /// # Panics
    /// Panics when `T` is missing, which means it either is not registered
    /// or does not override `snapshot()`.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get::<T>()
            .unwrap_or_else(|| panic!("CommandSnapshot: state {} missing", type_name::<T>()))
    }

    /// # Panics
    /// Panics when `T` is missing, which means it either is not registered
    /// or does not override `snapshot()`.
    pub fn compute<T: Compute>(&self) -> &T {
        self.computes
            .get::<T>()
            .unwrap_or_else(|| panic!("CommandSnapshot: compute {} missing", type_name::<T>()))
    }
}
