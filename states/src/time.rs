use std::any::Any;

use chrono::{DateTime, Utc};

use crate::{State, state_assign_impl};

/// Wall-clock state, refreshed once per frame by the app loop so every read
/// within a frame agrees, and pinnable in tests.
#[derive(Debug, Clone, Copy)]
pub struct Time(DateTime<Utc>);

impl Default for Time {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl Time {
    pub fn set_now(&mut self) {
        self.0 = Utc::now();
    }

    pub fn set(&mut self, at: DateTime<Utc>) {
        self.0 = at;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
