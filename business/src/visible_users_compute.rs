//! The visible list: record store filtered by country, then sorted.
//!
//! Pure derivation over [`UsersState`] and [`ViewParams`]; the runtime
//! recomputes it whenever either changes, so the UI only ever reads the
//! cached result.

use std::any::{Any, TypeId};

use roster_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};

use crate::records::UserRecord;
use crate::users_state::UsersState;
use crate::view_params::{SortBy, ViewParams};

#[derive(Debug, Clone, Default)]
pub struct VisibleUsersCompute {
    pub users: Vec<UserRecord>,
}

impl Compute for VisibleUsersCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 2] = [TypeId::of::<UsersState>(), TypeId::of::<ViewParams>()];
        const COMPUTE_IDS: [TypeId; 0] = [];
        (&STATE_IDS, &COMPUTE_IDS)
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let store = deps.get_state_ref::<UsersState>();
        let params = deps.get_state_ref::<ViewParams>();

        let filtered = filter_by_country(store.users(), &params.filter_country);
        let users = sort_users(filtered, params.sorting);

        updater.set(VisibleUsersCompute { users });
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Case-insensitive substring match on country; an empty filter passes
/// everything through.
fn filter_by_country(users: &[UserRecord], filter: &str) -> Vec<UserRecord> {
    if filter.is_empty() {
        return users.to_vec();
    }
    let needle = filter.to_lowercase();
    users
        .iter()
        .filter(|user| user.country().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable sort on the selected column; `SortBy::None` keeps fetch order.
/// Comparison is case-insensitive via Unicode lowercasing.
fn sort_users(mut users: Vec<UserRecord>, sorting: SortBy) -> Vec<UserRecord> {
    let key = |user: &UserRecord| -> String {
        match sorting {
            SortBy::None => String::new(),
            SortBy::Country => user.country().to_lowercase(),
            SortBy::Name => user.first_name().to_lowercase(),
            SortBy::Last => user.last_name().to_lowercase(),
        }
    };

    if sorting != SortBy::None {
        users.sort_by(|a, b| key(a).cmp(&key(b)));
    }
    users
}
