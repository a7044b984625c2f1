use std::any::{Any, TypeId};

use crate::{Dep, Updater};

/// Declared dependencies of a compute: state type ids, then compute type ids.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A derived value recomputed whenever one of its dependencies changes.
///
/// `compute()` must be pure over its declared dependencies: read through
/// [`Dep`], publish the new value with `updater.set(Self { .. })`, and do
/// nothing else. Side effects (network IO) must not live here because
/// computes run implicitly (startup, dirty propagation); put them in a
/// [`crate::Command`] and make the compute a result cache with an empty
/// dependency list and a no-op `compute()`.
pub trait Compute: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    /// Owned copy for command snapshots; `None` (the default) opts out.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value published through an updater.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Standard `assign_box` body for computes.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *target = *new_self,
        Err(_) => log::error!(
            "assign_impl: type mismatch assigning into {}",
            std::any::type_name::<T>()
        ),
    }
}
