//! Baseline feature data for Baseguard.
//!
//! Materializes a snapshot of the web-features Baseline dataset and answers
//! the lookups the policy engine evaluates against. A snapshot is loaded
//! once per run, from a JSON dump on disk or an in-process feed; network
//! fetching and cache refresh live outside this workspace. Lookups never
//! fail: IDs missing from the snapshot resolve to the unknown status.

pub mod resolver;
pub mod snapshot;

pub use baseguard_core::traits::BaselineSource;
pub use resolver::SnapshotResolver;
pub use snapshot::BaselineSnapshot;
