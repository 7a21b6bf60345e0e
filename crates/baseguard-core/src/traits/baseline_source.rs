//! Read-only Baseline lookups the policy engine evaluates against.

use crate::types::{BaselineFeatureInfo, BaselineStatus};

/// Baseline data seam.
///
/// Implementations must be pure at evaluation time: no I/O, no interior
/// mutation. The engine calls `status` once per occurrence and `info` for
/// every occurrence that proceeds past the skip checks, so lookups should
/// be cheap.
pub trait BaselineSource: Send + Sync {
    /// Maturity classification for a feature ID. `Unknown` when the ID is
    /// not in the dataset, including when the dataset is empty.
    fn status(&self, feature_id: &str) -> BaselineStatus;

    /// Full feature record, when the dataset has one.
    fn info(&self, feature_id: &str) -> Option<&BaselineFeatureInfo>;
}
