use std::any::Any;

use chrono::{DateTime, Utc};
use roster_states::{State, state_assign_impl};

use crate::records::UserRecord;

/// The record store: every user fetched so far, minus local deletions.
///
/// `pristine` holds the last-fetched batch untouched by deletes, so a reset
/// restores exactly that batch. Deleting and then loading more keeps both
/// behaviors honest: the delete stays gone, the new batch appends.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    users: Vec<UserRecord>,
    pristine: Vec<UserRecord>,
    last_fetch: Option<DateTime<Utc>>,
}

impl UsersState {
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    /// Append a fetched batch and make it the new pristine baseline.
    pub fn append_batch(&mut self, batch: Vec<UserRecord>, now: DateTime<Utc>) {
        self.users.extend(batch.iter().cloned());
        self.pristine = batch;
        self.last_fetch = Some(now);
    }

    /// Remove one user locally. Unknown ids are a no-op.
    pub fn delete_user(&mut self, uuid: &str) {
        self.users.retain(|user| user.uuid() != uuid);
    }

    /// Restore the last-fetched batch, discarding local deletions and any
    /// earlier pages.
    pub fn reset(&mut self) {
        self.users = self.pristine.clone();
    }
}

impl State for UsersState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
