//! Derive an enforcement configuration from Baseline browser targets.
//!
//! Projects that already declare targets such as `baseline 2022` or
//! `baseline widely available` should not have to restate the same policy
//! in `baseguard.toml`. This adapter maps those targets onto an
//! [`EnforcementConfig`] with the matching mode, rules and thresholds.

use std::collections::BTreeMap;

use baseguard_core::config::{EnforcementConfig, EnforcementMode};
use baseguard_core::constants::BASELINE_FLOOR_YEAR;
use baseguard_core::types::{BaselineThreshold, EnforcementLevel, FeatureCategory};
use tracing::debug;

use crate::yearly;

/// One parsed Baseline target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineQuery {
    /// `baseline <year>`: everything that reached Baseline in that year.
    Year(i32),
    /// `baseline widely available`.
    WidelyAvailable,
    /// `baseline newly available`.
    NewlyAvailable,
}

/// Map a set of Baseline targets to an enforcement configuration.
///
/// Year targets take precedence over `widely available`, which takes
/// precedence over `newly available`. Returns `None` when no target is a
/// Baseline target, leaving the caller on its explicit configuration.
pub fn derive_config(queries: &[BaselineQuery], current_year: i32) -> Option<EnforcementConfig> {
    let years: Vec<i32> = queries
        .iter()
        .filter_map(|query| match query {
            BaselineQuery::Year(year) => Some(*year),
            _ => None,
        })
        .collect();

    if !years.is_empty() {
        let mut config = EnforcementConfig::default();
        config.enforcement.mode = Some(EnforcementMode::Yearly);
        config.enforcement.yearly_rules = yearly_rules_for(&years, current_year);
        debug!(
            years = years.len(),
            rules = config.enforcement.yearly_rules.len(),
            "derived yearly enforcement from baseline year targets"
        );
        return Some(config);
    }

    if queries.contains(&BaselineQuery::WidelyAvailable) {
        debug!("derived per-feature enforcement from widely-available target");
        return Some(threshold_config(BaselineThreshold::Widely));
    }

    if queries.contains(&BaselineQuery::NewlyAvailable) {
        debug!("derived per-feature enforcement from newly-available target");
        return Some(threshold_config(BaselineThreshold::Newly));
    }

    None
}

/// Per-feature configuration requiring one threshold across all categories.
fn threshold_config(threshold: BaselineThreshold) -> EnforcementConfig {
    let mut config = EnforcementConfig::default();
    config.enforcement.mode = Some(EnforcementMode::PerFeature);
    for category in FeatureCategory::all() {
        config.rules.rule_mut(category).baseline_threshold = Some(threshold);
    }
    config
}

/// Expand year targets into a per-year level table.
///
/// Targeted years get the level their age earns today. Untargeted years in
/// between inherit `Error`, as do the two years below the oldest target
/// (never reaching below the first Baseline cohort). Years after the newest
/// target up to the current year get their age-based level, so a stale
/// target list still surfaces brand-new features.
fn yearly_rules_for(years: &[i32], current_year: i32) -> BTreeMap<i32, EnforcementLevel> {
    let mut rules = BTreeMap::new();
    let (Some(&min), Some(&max)) = (years.iter().min(), years.iter().max()) else {
        return rules;
    };

    let start = (min - 2).max(BASELINE_FLOOR_YEAR);
    for year in start..=max {
        let level = if years.contains(&year) {
            yearly::banded_level(current_year - year)
        } else {
            EnforcementLevel::Error
        };
        rules.insert(year, level);
    }
    for year in (max + 1)..=current_year {
        rules.insert(year, yearly::banded_level(current_year - year));
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_target_expands_to_a_level_table() {
        let config = derive_config(&[BaselineQuery::Year(2022)], 2025)
            .unwrap_or_else(|| panic!("year target must derive a config"));
        assert_eq!(config.enforcement.mode, Some(EnforcementMode::Yearly));

        let rules = &config.enforcement.yearly_rules;
        assert_eq!(rules.get(&2020), Some(&EnforcementLevel::Error));
        assert_eq!(rules.get(&2021), Some(&EnforcementLevel::Error));
        assert_eq!(rules.get(&2022), Some(&EnforcementLevel::Error));
        assert_eq!(rules.get(&2023), Some(&EnforcementLevel::Warn));
        assert_eq!(rules.get(&2024), Some(&EnforcementLevel::Info));
        assert_eq!(rules.get(&2025), Some(&EnforcementLevel::Off));
        assert_eq!(rules.get(&2019), None);
    }

    #[test]
    fn backfill_never_reaches_below_the_floor_year() {
        let config = derive_config(&[BaselineQuery::Year(2016)], 2025)
            .unwrap_or_else(|| panic!("year target must derive a config"));
        let rules = &config.enforcement.yearly_rules;
        assert_eq!(rules.keys().next(), Some(&BASELINE_FLOOR_YEAR));
        assert_eq!(rules.get(&2014), None);
    }

    #[test]
    fn gap_years_between_targets_inherit_error() {
        let config = derive_config(&[BaselineQuery::Year(2018), BaselineQuery::Year(2024)], 2025)
            .unwrap_or_else(|| panic!("year targets must derive a config"));
        let rules = &config.enforcement.yearly_rules;
        assert_eq!(rules.get(&2018), Some(&EnforcementLevel::Error));
        assert_eq!(rules.get(&2021), Some(&EnforcementLevel::Error));
        assert_eq!(rules.get(&2024), Some(&EnforcementLevel::Info));
        assert_eq!(rules.get(&2025), Some(&EnforcementLevel::Off));
    }

    #[test]
    fn years_take_precedence_over_availability_targets() {
        let queries = [
            BaselineQuery::WidelyAvailable,
            BaselineQuery::Year(2023),
            BaselineQuery::NewlyAvailable,
        ];
        let config = derive_config(&queries, 2025)
            .unwrap_or_else(|| panic!("mixed targets must derive a config"));
        assert_eq!(config.enforcement.mode, Some(EnforcementMode::Yearly));
        assert!(!config.enforcement.yearly_rules.is_empty());
    }

    #[test]
    fn widely_available_takes_precedence_over_newly() {
        let queries = [BaselineQuery::NewlyAvailable, BaselineQuery::WidelyAvailable];
        let config = derive_config(&queries, 2025)
            .unwrap_or_else(|| panic!("availability targets must derive a config"));
        assert_eq!(config.enforcement.mode, Some(EnforcementMode::PerFeature));
        for (_, rule) in config.rules.iter() {
            assert_eq!(rule.baseline_threshold, Some(BaselineThreshold::Widely));
        }
    }

    #[test]
    fn newly_available_maps_to_the_default_threshold() {
        let config = derive_config(&[BaselineQuery::NewlyAvailable], 2025)
            .unwrap_or_else(|| panic!("availability target must derive a config"));
        assert_eq!(config.enforcement.mode, Some(EnforcementMode::PerFeature));
        assert_eq!(
            config.rules.css.baseline_threshold,
            Some(BaselineThreshold::Newly)
        );
    }

    #[test]
    fn no_baseline_targets_derives_nothing() {
        assert_eq!(derive_config(&[], 2025), None);
    }
}
