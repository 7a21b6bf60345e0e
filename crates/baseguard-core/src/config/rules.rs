//! Per-category enforcement rules and allow-list exceptions.

use serde::{Deserialize, Serialize};

use crate::types::{BaselineThreshold, FeatureCategory};

/// The three category rule blocks policy evaluation is keyed by.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CategoryRules {
    pub css: CategoryRule,
    pub javascript: CategoryRule,
    pub html: CategoryRule,
}

impl CategoryRules {
    pub fn rule(&self, category: FeatureCategory) -> &CategoryRule {
        match category {
            FeatureCategory::Css => &self.css,
            FeatureCategory::Javascript => &self.javascript,
            FeatureCategory::Html => &self.html,
        }
    }

    pub fn rule_mut(&mut self, category: FeatureCategory) -> &mut CategoryRule {
        match category {
            FeatureCategory::Css => &mut self.css,
            FeatureCategory::Javascript => &mut self.javascript,
            FeatureCategory::Html => &mut self.html,
        }
    }

    /// Iterate rules in category declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureCategory, &CategoryRule)> {
        FeatureCategory::all()
            .into_iter()
            .map(move |category| (category, self.rule(category)))
    }
}

/// One category's rule: required Baseline maturity plus an allow-list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct CategoryRule {
    pub baseline_threshold: Option<BaselineThreshold>,
    pub allowed_exceptions: Vec<Exception>,
}

impl CategoryRule {
    /// Required maturity for this category, defaulting to `newly`.
    pub fn effective_threshold(&self) -> BaselineThreshold {
        self.baseline_threshold.unwrap_or(BaselineThreshold::Newly)
    }
}

/// One allow-list entry.
///
/// An entry matches an occurrence when every populated field matches:
/// `feature` (if set) must equal the occurrence's feature ID, and the file
/// must match at least one glob in `files` (if any are given). An entry
/// with neither field populated matches everything; config validation
/// flags such entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Exception {
    pub feature: Option<String>,
    pub files: Vec<String>,
    /// Free-text justification, surfaced in audits but never evaluated.
    pub reason: Option<String>,
}

impl Exception {
    /// Whether this entry would exempt every occurrence in its category.
    pub fn is_unconditional(&self) -> bool {
        self.feature.is_none() && self.files.is_empty()
    }
}
