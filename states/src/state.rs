use std::any::Any;

/// A piece of application state owned by [`crate::StateCtx`].
///
/// States are mutated either directly on the UI thread (via `state_mut` /
/// `update`) or by async command results applied through `assign_box`
/// during `sync_computes()`.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Owned copy of this state for command snapshots.
    ///
    /// Returning `None` (the default) opts the state out of snapshots;
    /// commands reading it via `CommandSnapshot::state` will then panic,
    /// which surfaces the missing override early.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value published through an updater.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Standard `assign_box` body for states; a type mismatch is a programming
/// error on the publishing side, logged rather than propagated.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *target = *new_self,
        Err(_) => log::error!(
            "state_assign_impl: type mismatch assigning into {}",
            std::any::type_name::<T>()
        ),
    }
}
