mod env_version;
mod status_line;
mod toolbar;
pub mod users_table;

pub use env_version::env_version;
pub use status_line::status_line;
pub use toolbar::toolbar;
pub use users_table::users_table;
