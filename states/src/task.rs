//! Task identity and cooperative cancellation for dispatched commands.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned command task.
///
/// Combines the command's `TypeId` with a generation counter so multiple
/// dispatches of the same command type can be told apart; higher generation
/// means a more recent dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned command task.
///
/// Cancellation is cooperative: `cancel()` signals the token, and the task
/// observes it at its next `tokio::select!` / `is_cancelled()` check. It
/// does not abort the task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_distinguishes_generations() {
        let type_id = TypeId::of::<String>();

        let first = TaskId::new(type_id, 1);
        let second = TaskId::new(type_id, 2);
        let other = TaskId::new(TypeId::of::<i32>(), 1);

        assert_eq!(first, TaskId::new(type_id, 1));
        assert_ne!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn handle_cancel_is_observable_through_clones() {
        let handle = TaskHandle::new(TaskId::new(TypeId::of::<String>(), 1), CancellationToken::new());
        let clone = handle.clone();

        assert!(!clone.is_cancelled());
        handle.cancel();
        assert!(clone.is_cancelled());
    }
}
