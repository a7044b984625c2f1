use std::any::{Any, TypeId};
use std::collections::BTreeMap;

use crate::{Compute, State};

/// Read-only view over a compute's declared dependencies, valid for the
/// duration of one `compute()` call.
pub struct Dep<'a> {
    inner: BTreeMap<TypeId, &'a dyn Any>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(entries: impl Iterator<Item = (TypeId, &'a dyn Any)>) -> Self {
        Self {
            inner: entries.collect(),
        }
    }

    /// # Panics
    /// Panics if `T` was not declared in the compute's `deps()` or is not
    /// registered in the context.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.inner
            .get(&TypeId::of::<T>())
            .copied()
            .and_then(|any| any.downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "Dep: state {} not available (missing from deps()?)",
                    std::any::type_name::<T>()
                )
            })
    }

    /// # Panics
    /// Panics if `T` was not declared in the compute's `deps()` or is not
    /// registered in the context.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.inner
            .get(&TypeId::of::<T>())
            .copied()
            .and_then(|any| any.downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "Dep: compute {} not available (missing from deps()?)",
                    std::any::type_name::<T>()
                )
            })
    }
}
