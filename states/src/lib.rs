//! Typed state runtime for the Roster app.
//!
//! The model has three kinds of participants, all registered in a
//! [`StateCtx`] owned by the UI thread:
//!
//! - [`State`]: plain mutable application state (record store, view
//!   parameters, config, time).
//! - [`Compute`]: derived values recomputed whenever a declared dependency
//!   changes. Computes must be pure; side effects belong in commands.
//! - [`Command`]: manual-only async side effects (network IO). A command
//!   receives an owned [`CommandSnapshot`] of the registered states and
//!   publishes results back through a [`LatestOnlyUpdater`]; dispatching a
//!   command again cancels the previous in-flight run and outdates its
//!   updater, so only the newest dispatch can land.
//!
//! The frame loop drives everything: `sync_computes()` at the start of a
//! frame applies pending async results and recomputes dirty computes in
//! dependency order; `run_computed()` at the end of the frame flushes
//! commands enqueued by widgets during that frame.

mod command;
mod compute;
mod ctx;
mod dep;
mod graph;
mod runtime;
mod snapshot;
mod state;
mod task;
mod time;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use graph::{Graph, TopologyError};
pub use snapshot::{CommandSnapshot, ComputeSnapshot, StateSnapshot};
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use time::Time;
pub use updater::{LatestOnlyUpdater, Updater};
