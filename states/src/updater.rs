use std::any::{Any, TypeId};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) type UpdateMsg = (TypeId, Box<dyn Any + Send>);

/// Publishes replacement state/compute values back to the owning
/// [`crate::StateCtx`]. Values are applied on the next `sync_computes()`.
#[derive(Clone)]
pub struct Updater {
    send: flume::Sender<UpdateMsg>,
}

impl Updater {
    pub(crate) fn new(send: flume::Sender<UpdateMsg>) -> Self {
        Self { send }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        // A closed channel means the ctx is gone; nothing left to update.
        let _ = self.send.send((TypeId::of::<T>(), Box::new(value)));
    }
}

/// Updater handed to commands.
///
/// Each dispatch of a command type gets a fresh generation; the shared
/// `latest` counter always holds the newest one. A superseded dispatch may
/// still be running (cancellation is cooperative), but anything it tries to
/// publish is dropped here, so the last dispatch wins deterministically.
#[derive(Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, generation: u64, latest: Arc<AtomicU64>) -> Self {
        Self {
            inner,
            generation,
            latest,
        }
    }

    /// True once a newer dispatch of the same command type exists.
    pub fn is_outdated(&self) -> bool {
        self.latest.load(Ordering::Acquire) != self.generation
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self.is_outdated() {
            log::debug!(
                "LatestOnlyUpdater: dropping stale update for {}",
                std::any::type_name::<T>()
            );
            return;
        }
        self.inner.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updater_pair() -> (Updater, flume::Receiver<UpdateMsg>) {
        let (send, recv) = flume::unbounded();
        (Updater::new(send), recv)
    }

    #[test]
    fn updater_sends_typed_value() {
        let (updater, recv) = updater_pair();
        updater.set(7_u32);

        let (id, boxed) = recv.try_recv().unwrap();
        assert_eq!(id, TypeId::of::<u32>());
        assert_eq!(*boxed.downcast::<u32>().unwrap(), 7);
    }

    #[test]
    fn latest_only_applies_current_generation() {
        let (updater, recv) = updater_pair();
        let latest = Arc::new(AtomicU64::new(2));

        let current = LatestOnlyUpdater::new(updater, 2, latest);
        assert!(!current.is_outdated());
        current.set(1_u8);
        assert!(recv.try_recv().is_ok());
    }

    #[test]
    fn latest_only_drops_stale_generation() {
        let (updater, recv) = updater_pair();
        let latest = Arc::new(AtomicU64::new(2));

        let stale = LatestOnlyUpdater::new(updater, 1, latest);
        assert!(stale.is_outdated());
        stale.set(1_u8);
        assert!(recv.try_recv().is_err());
    }

    #[test]
    fn generation_outdates_after_new_dispatch() {
        let (updater, _recv) = updater_pair();
        let latest = Arc::new(AtomicU64::new(1));

        let first = LatestOnlyUpdater::new(updater, 1, latest.clone());
        assert!(!first.is_outdated());

        // A new dispatch bumps the shared counter.
        latest.store(2, Ordering::Release);
        assert!(first.is_outdated());
    }
}
