//! Baseline maturity classification and per-feature metadata.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Cross-browser maturity classification of a web-platform feature.
///
/// `Limited`, `Newly`, and `Widely` form an ordinal scale
/// (`Limited < Newly < Widely`). `Unknown` sits outside the scale: it is
/// the degraded value for features missing from the dataset or carrying an
/// unrecognized status string, and it never satisfies any threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaselineStatus {
    Limited,
    Newly,
    Widely,
    #[default]
    Unknown,
}

impl BaselineStatus {
    /// Position on the ordinal scale. `None` for `Unknown`.
    pub fn rank(self) -> Option<u8> {
        match self {
            Self::Limited => Some(0),
            Self::Newly => Some(1),
            Self::Widely => Some(2),
            Self::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Newly => "newly",
            Self::Widely => "widely",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a status string. Anything unrecognized degrades to `Unknown`
    /// rather than failing; upstream data sources grow new labels.
    pub fn parse(s: &str) -> Self {
        match s {
            "limited" => Self::Limited,
            "newly" => Self::Newly,
            "widely" => Self::Widely,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BaselineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for BaselineStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BaselineStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Required maturity for a category rule. Unlike [`BaselineStatus`] this is
/// always on the ordinal scale, so config parsing rejects unknown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineThreshold {
    Limited,
    #[default]
    Newly,
    Widely,
}

impl BaselineThreshold {
    /// Position on the ordinal scale shared with [`BaselineStatus`].
    pub fn rank(self) -> u8 {
        match self {
            Self::Limited => 0,
            Self::Newly => 1,
            Self::Widely => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Newly => "newly",
            Self::Widely => "widely",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "limited" => Some(Self::Limited),
            "newly" => Some(Self::Newly),
            "widely" => Some(Self::Widely),
            _ => None,
        }
    }
}

impl fmt::Display for BaselineThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Baseline support block of a feature record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineSupport {
    pub status: BaselineStatus,
    /// Date the feature entered Baseline (reached newly available). Sole
    /// input to age computation under yearly enforcement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_date: Option<NaiveDate>,
    /// Date the feature reached widely available, when it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_date: Option<NaiveDate>,
}

/// One feature record from the Baseline dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineFeatureInfo {
    pub id: String,
    pub name: String,
    pub baseline: BaselineSupport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mdn_url: Option<String>,
}

impl BaselineFeatureInfo {
    /// Calendar year the feature entered Baseline, if dated.
    pub fn baseline_year(&self) -> Option<i32> {
        self.baseline.low_date.map(|date| date.year())
    }
}
