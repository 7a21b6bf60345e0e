//! Yearly enforcement: Baseline age bands, per-year overrides, and the
//! interop-priority boost.

use std::collections::BTreeMap;

use baseguard_core::config::EnforcementSettings;
use baseguard_core::constants::{
    ERROR_AGE_YEARS, INFO_AGE_YEARS, INTEROP_PRIORITY_FEATURES, WARN_AGE_YEARS,
};
use baseguard_core::types::{BaselineFeatureInfo, EnforcementLevel};

/// Outcome of yearly evaluation for one dated feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyOutcome {
    pub level: EnforcementLevel,
    /// Calendar year the feature entered Baseline.
    pub baseline_year: i32,
    /// Whole years between the Baseline year and the evaluation year.
    pub feature_age: i32,
}

/// Default level for a feature of the given age: three or more years in
/// Baseline must be adopted, two should be, one is worth knowing about,
/// and anything younger is below the enforcement window.
pub fn banded_level(age: i32) -> EnforcementLevel {
    if age >= ERROR_AGE_YEARS {
        EnforcementLevel::Error
    } else if age >= WARN_AGE_YEARS {
        EnforcementLevel::Warn
    } else if age >= INFO_AGE_YEARS {
        EnforcementLevel::Info
    } else {
        EnforcementLevel::Off
    }
}

/// Level for a Baseline year: an explicit per-year rule replaces the age
/// band entirely; the band is the fallback, not a floor.
pub fn level_for_year(
    baseline_year: i32,
    rules: &BTreeMap<i32, EnforcementLevel>,
    current_year: i32,
) -> EnforcementLevel {
    if let Some(level) = rules.get(&baseline_year) {
        return *level;
    }
    banded_level(current_year - baseline_year)
}

/// Whether a feature ID is in the fixed interop-priority set.
pub fn is_interop_priority(feature_id: &str) -> bool {
    INTEROP_PRIORITY_FEATURES.contains(&feature_id)
}

/// Evaluate one feature under yearly enforcement.
///
/// Returns `None` when the feature has no Baseline low date; such features
/// are not evaluable in this mode. An `Off` outcome is evaluable but below
/// the enforcement window. Neither produces a violation; the two are kept
/// distinct for diagnostics.
///
/// The interop boost applies after per-year overrides, so an explicitly
/// configured `warn` still escalates to `error` for a priority feature.
pub fn evaluate(
    info: &BaselineFeatureInfo,
    settings: &EnforcementSettings,
    current_year: i32,
) -> Option<YearlyOutcome> {
    let baseline_year = info.baseline_year()?;
    let mut level = level_for_year(baseline_year, &settings.yearly_rules, current_year);
    if settings.effective_interop_priority() && is_interop_priority(&info.id) {
        level = level.boosted();
    }
    Some(YearlyOutcome {
        level,
        baseline_year,
        feature_age: current_year - baseline_year,
    })
}
