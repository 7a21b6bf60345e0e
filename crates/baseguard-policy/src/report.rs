//! Evaluation output: the report, its summary, and the verdict inputs.

use std::collections::BTreeMap;

use baseguard_core::types::Severity;
use serde::{Deserialize, Serialize};

use crate::violation::Violation;

/// Violation counts bucketed for reporting.
///
/// The map buckets use `BTreeMap` so serialized summaries are byte-stable
/// from run to run regardless of evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationSummary {
    /// Occurrences evaluated, compliant or not.
    pub total_features: usize,
    pub total_violations: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Violations per feature category (`css`, `javascript`, `html`).
    pub by_category: BTreeMap<String, usize>,
    /// Violations per file path.
    pub by_file: BTreeMap<String, usize>,
}

impl ViolationSummary {
    pub fn compute(violations: &[Violation], total_features: usize) -> Self {
        let mut summary = Self {
            total_features,
            total_violations: violations.len(),
            ..Default::default()
        };
        for violation in violations {
            match violation.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            *summary
                .by_category
                .entry(violation.feature.category().as_str().to_string())
                .or_insert(0) += 1;
            *summary
                .by_file
                .entry(violation.feature.file.clone())
                .or_insert(0) += 1;
        }
        summary
    }
}

/// Result of one policy evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Ordered severity-first, then by file path, then by line.
    pub violations: Vec<Violation>,
    /// 0-100 aggregate; 100 means fully compliant.
    pub compliance_score: u8,
    /// Verdict under the configured `fail-on` severity and `min-score`.
    pub passed: bool,
    pub summary: ViolationSummary,
}

impl EvaluationReport {
    /// A report for an empty batch: compliant by definition.
    pub fn empty() -> Self {
        Self {
            violations: Vec::new(),
            compliance_score: 100,
            passed: true,
            summary: ViolationSummary::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_compliant() {
        let report = EvaluationReport::empty();
        assert_eq!(report.compliance_score, 100);
        assert!(report.passed);
        assert!(report.violations.is_empty());
        assert_eq!(report.summary.total_violations, 0);
    }

    #[test]
    fn summary_of_no_violations() {
        let summary = ViolationSummary::compute(&[], 12);
        assert_eq!(summary.total_features, 12);
        assert_eq!(summary.total_violations, 0);
        assert!(summary.by_category.is_empty());
        assert!(summary.by_file.is_empty());
    }
}
