//! Enforcement mode, yearly rule table, and scoring weights.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MIN_SCORE, DEFAULT_WEIGHT_HIGH, DEFAULT_WEIGHT_LOW, DEFAULT_WEIGHT_MEDIUM,
};
use crate::types::{EnforcementLevel, Severity};

/// Which policy branches run for each occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnforcementMode {
    /// Threshold checks against the per-category rules.
    #[default]
    PerFeature,
    /// Baseline-age checks against the yearly rule table.
    Yearly,
    /// Both branches; one occurrence can produce two violations.
    Hybrid,
}

impl EnforcementMode {
    pub fn checks_threshold(self) -> bool {
        matches!(self, Self::PerFeature | Self::Hybrid)
    }

    pub fn checks_yearly(self) -> bool {
        matches!(self, Self::Yearly | Self::Hybrid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerFeature => "per-feature",
            Self::Yearly => "yearly",
            Self::Hybrid => "hybrid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "per-feature" => Some(Self::PerFeature),
            "yearly" => Some(Self::Yearly),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

impl fmt::Display for EnforcementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `[enforcement]` config block.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct EnforcementSettings {
    pub mode: Option<EnforcementMode>,
    /// Explicit per-year enforcement levels, overriding the age bands.
    #[serde(with = "year_keys", skip_serializing_if = "BTreeMap::is_empty")]
    pub yearly_rules: BTreeMap<i32, EnforcementLevel>,
    /// Boost the enforcement level of interop-priority features one step.
    pub interop_priority: Option<bool>,
    pub severity_weights: SeverityWeights,
    /// Severity at or above which a run fails.
    pub fail_on: Option<Severity>,
    /// Minimum compliance score (0-100) for a passing run.
    pub min_score: Option<u8>,
}

impl EnforcementSettings {
    pub fn effective_mode(&self) -> EnforcementMode {
        self.mode.unwrap_or_default()
    }

    pub fn effective_interop_priority(&self) -> bool {
        self.interop_priority.unwrap_or(false)
    }

    pub fn effective_fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::High)
    }

    pub fn effective_min_score(&self) -> u8 {
        self.min_score.unwrap_or(DEFAULT_MIN_SCORE)
    }
}

/// Per-severity scoring weights, each expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SeverityWeights {
    pub high: Option<f64>,
    pub medium: Option<f64>,
    pub low: Option<f64>,
}

impl SeverityWeights {
    /// Effective weight for a severity. Out-of-range values are clamped
    /// into `[0, 1]` here so a miswritten config degrades the score instead
    /// of corrupting it; validation reports them separately.
    pub fn weight(&self, severity: Severity) -> f64 {
        let raw = match severity {
            Severity::High => self.high.unwrap_or(DEFAULT_WEIGHT_HIGH),
            Severity::Medium => self.medium.unwrap_or(DEFAULT_WEIGHT_MEDIUM),
            Severity::Low => self.low.unwrap_or(DEFAULT_WEIGHT_LOW),
        };
        if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Raw configured values paired with their severities, for validation.
    pub fn configured(&self) -> [(Severity, Option<f64>); 3] {
        [
            (Severity::High, self.high),
            (Severity::Medium, self.medium),
            (Severity::Low, self.low),
        ]
    }
}

/// TOML table keys are strings; the yearly rule table is keyed by calendar
/// year. Bridges `2022 = "warn"` to a `BTreeMap<i32, EnforcementLevel>`.
mod year_keys {
    use std::collections::BTreeMap;

    use serde::de::Error as DeError;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::EnforcementLevel;

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<i32, EnforcementLevel>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (year, level) in map {
            out.serialize_entry(&year.to_string(), level)?;
        }
        out.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<i32, EnforcementLevel>, D::Error> {
        let raw = BTreeMap::<String, EnforcementLevel>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for (key, level) in raw {
            let year: i32 = key
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid year key '{key}'")))?;
            map.insert(year, level);
        }
        Ok(map)
    }
}
