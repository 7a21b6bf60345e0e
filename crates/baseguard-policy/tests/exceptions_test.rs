//! Exception handling through the engine: category scoping, feature and
//! file matching, and unconditional allow-lists.

use baseguard_baseline::{BaselineSnapshot, SnapshotResolver};
use baseguard_core::config::{EnforcementConfig, Exception};
use baseguard_core::types::{
    BaselineFeatureInfo, BaselineStatus, BaselineSupport, DetectedFeature, SourceLocation,
};
use baseguard_policy::{EvaluationContext, PolicyEngine};
use chrono::{TimeZone, Utc};

fn limited(id: &str) -> BaselineFeatureInfo {
    BaselineFeatureInfo {
        id: id.to_string(),
        name: id.to_string(),
        baseline: BaselineSupport {
            status: BaselineStatus::Limited,
            low_date: None,
            high_date: None,
        },
        ..BaselineFeatureInfo::default()
    }
}

fn resolver() -> SnapshotResolver {
    let mut snapshot = BaselineSnapshot::new();
    for info in [
        limited("anchor-positioning"),
        limited("view-transitions"),
        limited("web-bluetooth"),
    ] {
        snapshot.insert(info);
    }
    SnapshotResolver::new(snapshot)
}

fn occurrence(feature_id: &str, feature_type: &str, file: &str) -> DetectedFeature {
    DetectedFeature {
        feature_id: Some(feature_id.to_string()),
        feature_type: feature_type.to_string(),
        file: file.to_string(),
        location: SourceLocation::new(1, 1),
        name: feature_id.to_string(),
        value: None,
        context: None,
    }
}

fn fixed_context() -> EvaluationContext {
    EvaluationContext::at(2025, Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
}

fn exception(feature: Option<&str>, files: &[&str]) -> Exception {
    Exception {
        feature: feature.map(str::to_string),
        files: files.iter().map(|f| f.to_string()).collect(),
        reason: None,
    }
}

/// EXC-01: exceptions are scoped to their category block; a css allow-list
/// never exempts a javascript occurrence.
#[test]
fn exceptions_are_scoped_to_their_category() {
    let source = resolver();
    let mut config = EnforcementConfig::default();
    config
        .rules
        .css
        .allowed_exceptions
        .push(exception(None, &["legacy/**"]));
    let engine = PolicyEngine::new(config, &source);

    let batch = vec![
        occurrence("anchor-positioning", "css-property", "legacy/a.css"),
        occurrence("web-bluetooth", "js-api-call", "legacy/b.js"),
    ];
    let report = engine.evaluate_at(&batch, fixed_context());

    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0].feature.feature_id.as_deref(),
        Some("web-bluetooth")
    );
}

/// EXC-02: a feature-only exception exempts that feature in every file.
#[test]
fn feature_only_exception_spans_all_files() {
    let source = resolver();
    let mut config = EnforcementConfig::default();
    config
        .rules
        .css
        .allowed_exceptions
        .push(exception(Some("anchor-positioning"), &[]));
    let engine = PolicyEngine::new(config, &source);

    let batch = vec![
        occurrence("anchor-positioning", "css-property", "src/a.css"),
        occurrence("anchor-positioning", "css-property", "legacy/b.css"),
        occurrence("view-transitions", "css-property", "src/a.css"),
    ];
    let report = engine.evaluate_at(&batch, fixed_context());

    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0].feature.feature_id.as_deref(),
        Some("view-transitions")
    );
}

/// EXC-03: an entry with no feature and no files exempts the whole
/// category.
#[test]
fn unconditional_exception_exempts_the_category() {
    let source = resolver();
    let mut config = EnforcementConfig::default();
    config.rules.css.allowed_exceptions.push(exception(None, &[]));
    let engine = PolicyEngine::new(config, &source);

    let batch = vec![
        occurrence("anchor-positioning", "css-property", "src/a.css"),
        occurrence("view-transitions", "css-property", "src/b.css"),
        occurrence("web-bluetooth", "js-api-call", "src/main.js"),
    ];
    let report = engine.evaluate_at(&batch, fixed_context());

    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0].feature.feature_id.as_deref(),
        Some("web-bluetooth")
    );
}

/// EXC-04: entries combine as alternatives; matching any one exempts the
/// occurrence.
#[test]
fn entries_combine_as_alternatives() {
    let source = resolver();
    let mut config = EnforcementConfig::default();
    config
        .rules
        .css
        .allowed_exceptions
        .push(exception(Some("anchor-positioning"), &[]));
    config
        .rules
        .css
        .allowed_exceptions
        .push(exception(None, &["vendor/**"]));
    let engine = PolicyEngine::new(config, &source);

    let batch = vec![
        occurrence("anchor-positioning", "css-property", "src/a.css"),
        occurrence("view-transitions", "css-property", "vendor/x.css"),
        occurrence("view-transitions", "css-property", "src/x.css"),
    ];
    let report = engine.evaluate_at(&batch, fixed_context());

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].file(), "src/x.css");
}

/// EXC-05: file globs support brace alternation.
#[test]
fn file_globs_support_alternation() {
    let source = resolver();
    let mut config = EnforcementConfig::default();
    config
        .rules
        .css
        .allowed_exceptions
        .push(exception(None, &["**/*.{scss,sass}"]));
    let engine = PolicyEngine::new(config, &source);

    let batch = vec![
        occurrence("anchor-positioning", "css-property", "src/theme.scss"),
        occurrence("anchor-positioning", "css-property", "src/theme.css"),
    ];
    let report = engine.evaluate_at(&batch, fixed_context());

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].file(), "src/theme.css");
}
