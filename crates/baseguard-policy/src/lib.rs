//! Policy evaluation engine for Baseguard.
//!
//! Takes a batch of detected feature occurrences plus a merged enforcement
//! configuration and produces a deterministic, ordered set of violations
//! with severities, remediation hints, a 0-100 compliance score, and a
//! pass/fail verdict. Evaluation is pure: same occurrences, same snapshot,
//! same config, same clock, byte-identical report.
//!
//! The two policy branches are threshold enforcement (ordinal Baseline
//! maturity per category) and yearly enforcement (age of the feature's
//! Baseline year, with explicit per-year overrides and an interop-priority
//! boost). Hybrid mode runs both and keeps both findings.

pub mod autoconf;
pub mod engine;
pub mod exceptions;
pub mod remediation;
pub mod report;
pub mod threshold;
pub mod violation;
pub mod yearly;

pub use autoconf::{derive_config, BaselineQuery};
pub use engine::{EvaluationContext, PolicyEngine};
pub use exceptions::ExceptionMatcher;
pub use remediation::{Remediation, RemediationCatalog};
pub use report::{EvaluationReport, ViolationSummary};
pub use violation::{Violation, ViolationKind};
