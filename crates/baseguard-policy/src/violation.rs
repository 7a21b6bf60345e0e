//! Violation records, stable IDs, and the builder that assembles them.

use baseguard_core::constants::VIOLATION_ID_LEN;
use baseguard_core::types::{
    BaselineFeatureInfo, BaselineStatus, BaselineThreshold, DetectedFeature, EnforcementLevel,
    Severity, SourceLocation,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::remediation::{Remediation, RemediationCatalog};
use crate::threshold;
use crate::yearly::YearlyOutcome;

/// Which policy branch produced a violation, with the branch-specific
/// evidence. Hybrid runs can produce one of each for the same occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "violation_type", rename_all = "lowercase")]
pub enum ViolationKind {
    /// The feature's maturity is below the category's required threshold.
    Threshold { required: BaselineThreshold },
    /// The feature's Baseline year falls in an enforced window.
    Yearly {
        level: EnforcementLevel,
        baseline_year: i32,
        feature_age: i32,
        message: String,
    },
}

/// One feature occurrence that fails configured policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Stable identifier derived from the occurrence provenance. Identical
    /// across runs for the same occurrence, so CI can diff reports.
    pub id: String,
    /// The occurrence as the detector reported it.
    pub feature: DetectedFeature,
    pub current_status: BaselineStatus,
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: ViolationKind,
    pub remediation: Remediation,
    /// Evaluation instant, shared by every violation in a report.
    pub timestamp: DateTime<Utc>,
}

impl Violation {
    pub fn file(&self) -> &str {
        &self.feature.file
    }

    pub fn line(&self) -> u32 {
        self.feature.location.line
    }
}

/// Stable violation ID: the first [`VIOLATION_ID_LEN`] hex chars of the
/// xxh3-64 digest of `feature_id|file|line|column`. Runs, hosts, and
/// hash-seed churn do not move it.
pub fn violation_id(feature_id: &str, file: &str, location: SourceLocation) -> String {
    let key = format!(
        "{feature_id}|{file}|{}|{}",
        location.line, location.column
    );
    let digest = xxh3_64(key.as_bytes());
    let mut hex = format!("{digest:016x}");
    hex.truncate(VIOLATION_ID_LEN);
    hex
}

/// Assembles violation records for non-compliant occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViolationBuilder {
    catalog: RemediationCatalog,
}

impl ViolationBuilder {
    pub fn new() -> Self {
        Self {
            catalog: RemediationCatalog::new(),
        }
    }

    /// Build a threshold violation. Severity comes from the ordinal gap
    /// between the current status and the requirement.
    pub fn threshold_violation(
        &self,
        feature: &DetectedFeature,
        feature_id: &str,
        current_status: BaselineStatus,
        required: BaselineThreshold,
        info: Option<&BaselineFeatureInfo>,
        timestamp: DateTime<Utc>,
    ) -> Violation {
        Violation {
            id: violation_id(feature_id, &feature.file, feature.location),
            feature: feature.clone(),
            current_status,
            severity: threshold::severity_from_gap(current_status, required),
            kind: ViolationKind::Threshold { required },
            remediation: self.catalog.for_feature(feature_id, info),
            timestamp,
        }
    }

    /// Build a yearly violation. Severity comes from the enforcement level.
    pub fn yearly_violation(
        &self,
        feature: &DetectedFeature,
        feature_id: &str,
        current_status: BaselineStatus,
        outcome: YearlyOutcome,
        info: Option<&BaselineFeatureInfo>,
        timestamp: DateTime<Utc>,
    ) -> Violation {
        Violation {
            id: violation_id(feature_id, &feature.file, feature.location),
            feature: feature.clone(),
            current_status,
            severity: outcome.level.severity(),
            kind: ViolationKind::Yearly {
                level: outcome.level,
                baseline_year: outcome.baseline_year,
                feature_age: outcome.feature_age,
                message: yearly_message(feature_id, outcome),
            },
            remediation: self.catalog.for_feature(feature_id, info),
            timestamp,
        }
    }
}

/// One fixed message template per enforcement level.
fn yearly_message(feature_id: &str, outcome: YearlyOutcome) -> String {
    let YearlyOutcome {
        level,
        baseline_year,
        feature_age,
    } = outcome;
    match level {
        EnforcementLevel::Error => format!(
            "'{feature_id}' reached Baseline in {baseline_year} ({feature_age} years ago) and is required by the yearly policy"
        ),
        EnforcementLevel::Warn => format!(
            "'{feature_id}' reached Baseline in {baseline_year} ({feature_age} years ago); adoption is expected"
        ),
        EnforcementLevel::Info => format!(
            "'{feature_id}' reached Baseline in {baseline_year}; consider adopting it"
        ),
        EnforcementLevel::Off => format!(
            "'{feature_id}' entered Baseline in {baseline_year} and is below the enforcement window"
        ),
    }
}
