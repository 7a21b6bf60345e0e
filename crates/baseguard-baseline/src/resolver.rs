//! Snapshot-backed implementation of the Baseline lookup seam.

use baseguard_core::traits::BaselineSource;
use baseguard_core::types::{BaselineFeatureInfo, BaselineStatus};

use crate::snapshot::BaselineSnapshot;

/// [`BaselineSource`] backed by a preloaded [`BaselineSnapshot`].
///
/// Owns the snapshot for the duration of a run. An empty snapshot is valid
/// and resolves every ID to `Unknown`, which the engine skips; a run
/// against it reports full compliance rather than erroring.
#[derive(Debug, Default)]
pub struct SnapshotResolver {
    snapshot: BaselineSnapshot,
}

impl SnapshotResolver {
    pub fn new(snapshot: BaselineSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &BaselineSnapshot {
        &self.snapshot
    }
}

impl BaselineSource for SnapshotResolver {
    fn status(&self, feature_id: &str) -> BaselineStatus {
        self.snapshot.status(feature_id)
    }

    fn info(&self, feature_id: &str) -> Option<&BaselineFeatureInfo> {
        self.snapshot.get(feature_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseguard_core::types::BaselineSupport;

    #[test]
    fn empty_resolver_answers_unknown() {
        let resolver = SnapshotResolver::default();
        assert_eq!(resolver.status("grid"), BaselineStatus::Unknown);
        assert!(resolver.info("grid").is_none());
    }

    #[test]
    fn resolver_reads_through_to_snapshot() {
        let mut snapshot = BaselineSnapshot::new();
        snapshot.insert(BaselineFeatureInfo {
            id: "grid".to_string(),
            name: "Grid".to_string(),
            baseline: BaselineSupport {
                status: BaselineStatus::Widely,
                ..Default::default()
            },
            ..Default::default()
        });

        let resolver = SnapshotResolver::new(snapshot);
        assert_eq!(resolver.status("grid"), BaselineStatus::Widely);
        assert_eq!(resolver.info("grid").map(|i| i.name.as_str()), Some("Grid"));
    }
}
