//! Detected feature occurrences and their category mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three feature categories policy rules are keyed by.
///
/// Detector type tags map onto this closed set once, at the occurrence
/// level, instead of being string-matched at every decision point.
/// Unrecognized tags fall back to `Css`, whose rule also serves as the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Css,
    Javascript,
    Html,
}

impl FeatureCategory {
    /// Map a detector type tag (`css-property`, `js-api-call`,
    /// `html-element`, ...) to its category.
    pub fn from_type_tag(tag: &str) -> Self {
        if tag.starts_with("js-") {
            Self::Javascript
        } else if tag.starts_with("html-") {
            Self::Html
        } else {
            Self::Css
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Javascript => "javascript",
            Self::Html => "html",
        }
    }

    pub fn all() -> [FeatureCategory; 3] {
        [Self::Css, Self::Javascript, Self::Html]
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source position of a detected occurrence. Lines and columns are 1-based;
/// the end markers are optional because not every detector reports spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            end_line: None,
            end_column: None,
        }
    }
}

/// A single feature occurrence reported by a detector.
///
/// Immutable once produced; the engine consumes one batch per evaluation
/// run and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedFeature {
    /// Key into the Baseline dataset. `None` means the detector could not
    /// attribute the occurrence to a known feature; the engine skips such
    /// occurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,
    /// Detector type tag, e.g. `css-property` or `js-api-call`.
    pub feature_type: String,
    /// Path of the scanned file, relative to the project root.
    pub file: String,
    pub location: SourceLocation,
    /// What was matched: property name, API path, element name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Surrounding source snippet, when the detector captured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl DetectedFeature {
    pub fn category(&self) -> FeatureCategory {
        FeatureCategory::from_type_tag(&self.feature_type)
    }
}
