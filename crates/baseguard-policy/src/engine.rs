//! Policy orchestrator: one pass from detected occurrences to a report.

use baseguard_core::config::EnforcementConfig;
use baseguard_core::traits::BaselineSource;
use baseguard_core::types::{BaselineStatus, DetectedFeature, FeatureCategory};
use chrono::{DateTime, Datelike, Utc};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::exceptions::ExceptionMatcher;
use crate::report::{EvaluationReport, ViolationSummary};
use crate::threshold;
use crate::violation::{Violation, ViolationBuilder};
use crate::yearly;

/// The instant an evaluation runs against.
///
/// Production callers use [`EvaluationContext::now`]; tests and replayed
/// runs pin an explicit instant so reports come out byte-identical.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext {
    /// Calendar year used for Baseline age computation.
    pub current_year: i32,
    /// Timestamp stamped onto every violation in the report.
    pub timestamp: DateTime<Utc>,
}

impl EvaluationContext {
    pub fn now() -> Self {
        let timestamp = Utc::now();
        Self {
            current_year: timestamp.year(),
            timestamp,
        }
    }

    pub fn at(current_year: i32, timestamp: DateTime<Utc>) -> Self {
        Self {
            current_year,
            timestamp,
        }
    }
}

/// Compiled allow-lists, one matcher per category.
struct ExceptionMatchers {
    css: ExceptionMatcher,
    javascript: ExceptionMatcher,
    html: ExceptionMatcher,
}

impl ExceptionMatchers {
    fn compile(config: &EnforcementConfig) -> Self {
        Self {
            css: ExceptionMatcher::new(config.exceptions_for(FeatureCategory::Css)),
            javascript: ExceptionMatcher::new(config.exceptions_for(FeatureCategory::Javascript)),
            html: ExceptionMatcher::new(config.exceptions_for(FeatureCategory::Html)),
        }
    }

    fn get(&self, category: FeatureCategory) -> &ExceptionMatcher {
        match category {
            FeatureCategory::Css => &self.css,
            FeatureCategory::Javascript => &self.javascript,
            FeatureCategory::Html => &self.html,
        }
    }
}

/// The policy evaluation engine.
///
/// Holds the merged configuration, the compiled exception matchers, and
/// the remediation catalog. Evaluation is a pure function of the input
/// batch, the snapshot behind `source`, and the evaluation context; the
/// engine itself is freely shareable across threads.
pub struct PolicyEngine<'s> {
    config: EnforcementConfig,
    source: &'s dyn BaselineSource,
    matchers: ExceptionMatchers,
    builder: ViolationBuilder,
}

impl<'s> PolicyEngine<'s> {
    /// Build an engine for one configuration. Exception globs are compiled
    /// here, once, not per occurrence.
    pub fn new(config: EnforcementConfig, source: &'s dyn BaselineSource) -> Self {
        let matchers = ExceptionMatchers::compile(&config);
        Self {
            config,
            source,
            matchers,
            builder: ViolationBuilder::new(),
        }
    }

    pub fn config(&self) -> &EnforcementConfig {
        &self.config
    }

    /// Evaluate a batch against the current wall clock.
    pub fn evaluate(&self, features: &[DetectedFeature]) -> EvaluationReport {
        self.evaluate_at(features, EvaluationContext::now())
    }

    /// Evaluate a batch at an explicit instant.
    ///
    /// The per-occurrence pass runs in parallel; `collect` preserves input
    /// order, and the final sort is stable, so ties keep their relative
    /// input order and the report is deterministic.
    pub fn evaluate_at(
        &self,
        features: &[DetectedFeature],
        ctx: EvaluationContext,
    ) -> EvaluationReport {
        if features.is_empty() {
            debug!("empty batch; nothing to evaluate");
            return EvaluationReport::empty();
        }

        let mut violations: Vec<Violation> = features
            .par_iter()
            .flat_map_iter(|feature| self.evaluate_feature(feature, &ctx))
            .collect();

        violations.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then_with(|| a.file().cmp(b.file()))
                .then_with(|| a.line().cmp(&b.line()))
        });

        let compliance_score = self.compliance_score(&violations, features.len());
        let summary = ViolationSummary::compute(&violations, features.len());
        let passed = self.verdict(&violations, compliance_score);

        info!(
            features = features.len(),
            violations = violations.len(),
            score = compliance_score,
            passed,
            "policy evaluation complete"
        );

        EvaluationReport {
            violations,
            compliance_score,
            passed,
            summary,
        }
    }

    /// Evaluate one occurrence: skip checks first, then the branch(es) the
    /// configured mode selects. Hybrid mode can emit two violations.
    fn evaluate_feature(
        &self,
        feature: &DetectedFeature,
        ctx: &EvaluationContext,
    ) -> Vec<Violation> {
        let Some(feature_id) = feature.feature_id.as_deref() else {
            debug!(
                file = %feature.file,
                name = %feature.name,
                "skipping occurrence without a feature id"
            );
            return Vec::new();
        };

        let current_status = self.source.status(feature_id);
        if current_status == BaselineStatus::Unknown {
            debug!(feature = feature_id, "skipping feature with unknown baseline status");
            return Vec::new();
        }

        let category = feature.category();
        if self.matchers.get(category).is_exempt(feature_id, &feature.file) {
            debug!(
                feature = feature_id,
                file = %feature.file,
                "occurrence exempt by configured exception"
            );
            return Vec::new();
        }

        let info = self.source.info(feature_id);
        let mode = self.config.enforcement.effective_mode();
        let mut violations = Vec::new();

        if mode.checks_yearly() {
            match info.and_then(|info| {
                yearly::evaluate(info, &self.config.enforcement, ctx.current_year)
            }) {
                Some(outcome) if outcome.level.emits() => {
                    violations.push(self.builder.yearly_violation(
                        feature,
                        feature_id,
                        current_status,
                        outcome,
                        info,
                        ctx.timestamp,
                    ));
                }
                Some(_) => {
                    debug!(feature = feature_id, "yearly level off; below the enforcement window");
                }
                None => {
                    debug!(feature = feature_id, "no baseline date; yearly check skipped");
                }
            }
        }

        if mode.checks_threshold() {
            let required = self.config.threshold_for(category);
            if !threshold::meets_threshold(current_status, required) {
                violations.push(self.builder.threshold_violation(
                    feature,
                    feature_id,
                    current_status,
                    required,
                    info,
                    ctx.timestamp,
                ));
            }
        }

        violations
    }

    /// Weighted compliance score: `round(max(0, (1 - sum/total) * 100))`,
    /// where `sum` is the clamped weight of every violation and `total` is
    /// the batch size. Callers guarantee `total > 0`.
    fn compliance_score(&self, violations: &[Violation], total_features: usize) -> u8 {
        let weights = &self.config.enforcement.severity_weights;
        let weighted: f64 = violations
            .iter()
            .map(|violation| weights.weight(violation.severity))
            .sum();
        let score = (1.0 - weighted / total_features as f64) * 100.0;
        score.max(0.0).round() as u8
    }

    /// A run passes when no violation reaches the `fail-on` severity and
    /// the score clears `min-score`.
    fn verdict(&self, violations: &[Violation], score: u8) -> bool {
        let fail_on = self.config.enforcement.effective_fail_on();
        let blocking = violations
            .iter()
            .any(|violation| violation.severity.rank() >= fail_on.rank());
        !blocking && score >= self.config.enforcement.effective_min_score()
    }
}
