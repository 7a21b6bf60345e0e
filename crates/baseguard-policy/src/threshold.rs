//! Ordinal threshold checks for Baseline maturity.

use baseguard_core::types::{BaselineStatus, BaselineThreshold, Severity};

/// Whether `current` satisfies `required` on the ordinal scale
/// `limited < newly < widely`.
///
/// `Unknown` has no rank and never passes. The orchestrator skips unknown
/// statuses before this check, so an `Unknown` here only occurs when the
/// function is used directly.
pub fn meets_threshold(current: BaselineStatus, required: BaselineThreshold) -> bool {
    match current.rank() {
        Some(rank) => rank >= required.rank(),
        None => false,
    }
}

/// Severity of a failed threshold check, from the size of the ordinal gap.
///
/// A feature two steps below the requirement (`limited` against `widely`)
/// is high severity; one step below is medium; anything else is low.
pub fn severity_from_gap(current: BaselineStatus, required: BaselineThreshold) -> Severity {
    let Some(rank) = current.rank() else {
        // An unranked status is the widest possible gap.
        return Severity::High;
    };
    let gap = i32::from(required.rank()) - i32::from(rank);
    if gap >= 2 {
        Severity::High
    } else if gap >= 1 {
        Severity::Medium
    } else {
        Severity::Low
    }
}
