//! Preloaded snapshot of the Baseline feature dataset.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use baseguard_core::errors::SnapshotError;
use baseguard_core::types::{BaselineFeatureInfo, BaselineStatus, BaselineSupport};

/// In-memory snapshot of the Baseline feature dataset.
///
/// Populated once per run and read-only afterwards. The policy engine
/// performs one or two lookups per detected occurrence, so everything is
/// held in a flat `FxHashMap` keyed by feature ID.
#[derive(Debug, Default)]
pub struct BaselineSnapshot {
    features: FxHashMap<String, BaselineFeatureInfo>,
}

/// Raw record shapes of the JSON dump. The dump is keyed by feature ID, so
/// the ID is not repeated inside each record.
#[derive(Deserialize)]
struct RawDump {
    #[serde(default)]
    features: FxHashMap<String, RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    baseline: BaselineSupport,
    #[serde(default)]
    spec_url: Option<String>,
    #[serde(default)]
    mdn_url: Option<String>,
}

impl BaselineSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from a normalized web-features JSON dump.
    ///
    /// Records with unrecognized or missing baseline status blocks are kept
    /// with status `Unknown` rather than rejected; the dataset grows faster
    /// than this crate releases.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawDump = serde_json::from_str(json)?;
        let mut features =
            FxHashMap::with_capacity_and_hasher(raw.features.len(), Default::default());
        for (id, feature) in raw.features {
            let info = BaselineFeatureInfo {
                id: id.clone(),
                name: feature.name,
                baseline: feature.baseline,
                description: feature.description,
                spec_url: feature.spec_url,
                mdn_url: feature.mdn_url,
            };
            features.insert(id, info);
        }
        debug!(features = features.len(), "baseline snapshot parsed");
        Ok(Self { features })
    }

    /// Load a snapshot dump from disk.
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Insert or replace one feature record. Used by pre-normalized feeds
    /// and test fixtures.
    pub fn insert(&mut self, info: BaselineFeatureInfo) {
        self.features.insert(info.id.clone(), info);
    }

    pub fn get(&self, feature_id: &str) -> Option<&BaselineFeatureInfo> {
        self.features.get(feature_id)
    }

    /// Status lookup that degrades to `Unknown` for missing IDs.
    pub fn status(&self, feature_id: &str) -> BaselineStatus {
        self.features
            .get(feature_id)
            .map(|info| info.baseline.status)
            .unwrap_or(BaselineStatus::Unknown)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate all records, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &BaselineFeatureInfo> {
        self.features.values()
    }
}
