//! Error handling for Baseguard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//! Policy evaluation itself is infallible; errors occur at the edges,
//! when loading configuration and snapshot data.

pub mod config_error;
pub mod snapshot_error;

pub use config_error::ConfigError;
pub use snapshot_error::SnapshotError;
