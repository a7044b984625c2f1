//! Business layer for the Roster app.
//!
//! Owns the domain states ([`UsersState`], [`ViewParams`]), the network
//! client against the random-user API, and the computes/commands that glue
//! them into the state runtime. No egui code lives here; the UI crate reads
//! these types through `StateCtx`.

pub mod api;
pub mod config;
pub mod fetch_users_compute;
pub mod http;
pub mod records;
pub mod users_state;
pub mod view_params;
pub mod visible_users_compute;

pub use config::BusinessConfig;
pub use fetch_users_compute::{FetchUsersCommand, FetchUsersCompute, FetchUsersResult};
pub use records::{RandomUserResponse, UserRecord};
pub use users_state::UsersState;
pub use view_params::{SortBy, ViewParams};
pub use visible_users_compute::VisibleUsersCompute;
