//! Severity and yearly enforcement-level scales.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Violation severity.
///
/// Declaration order doubles as the report sort order: `High` sorts first.
/// Use [`Severity::rank`] when comparing how severe two values are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Numeric severity: higher means more severe.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Yearly enforcement level, ordered `Off < Info < Warn < Error`.
///
/// `Off` means the feature's Baseline year is below the enforcement window;
/// it is a real outcome, distinct from "not evaluable", and emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementLevel {
    Off,
    Info,
    Warn,
    Error,
}

impl EnforcementLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// One step up the scale, clamped at `Error`.
    pub fn boosted(self) -> Self {
        match self {
            Self::Off => Self::Info,
            Self::Info => Self::Warn,
            Self::Warn => Self::Error,
            Self::Error => Self::Error,
        }
    }

    /// Whether violations at this level are emitted at all.
    pub fn emits(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Severity attached to violations emitted at this level.
    pub fn severity(self) -> Severity {
        match self {
            Self::Error => Severity::High,
            Self::Warn => Severity::Medium,
            Self::Info | Self::Off => Severity::Low,
        }
    }
}

impl fmt::Display for EnforcementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_sort_order_puts_high_first() {
        let mut severities = vec![Severity::Low, Severity::High, Severity::Medium];
        severities.sort();
        assert_eq!(severities, vec![Severity::High, Severity::Medium, Severity::Low]);
    }

    #[test]
    fn severity_rank_orders_by_severity() {
        assert!(Severity::High.rank() > Severity::Medium.rank());
        assert!(Severity::Medium.rank() > Severity::Low.rank());
    }

    #[test]
    fn boost_steps_once_and_clamps_at_error() {
        assert_eq!(EnforcementLevel::Off.boosted(), EnforcementLevel::Info);
        assert_eq!(EnforcementLevel::Info.boosted(), EnforcementLevel::Warn);
        assert_eq!(EnforcementLevel::Warn.boosted(), EnforcementLevel::Error);
        assert_eq!(EnforcementLevel::Error.boosted(), EnforcementLevel::Error);
    }

    #[test]
    fn level_to_severity_mapping() {
        assert_eq!(EnforcementLevel::Error.severity(), Severity::High);
        assert_eq!(EnforcementLevel::Warn.severity(), Severity::Medium);
        assert_eq!(EnforcementLevel::Info.severity(), Severity::Low);
        assert!(!EnforcementLevel::Off.emits());
    }
}
