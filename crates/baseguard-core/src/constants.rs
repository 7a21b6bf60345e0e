//! Shared constants for the Baseguard compliance engine.

/// Baseguard version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "baseguard.toml";

/// Default severity weight for high-severity violations.
pub const DEFAULT_WEIGHT_HIGH: f64 = 1.0;

/// Default severity weight for medium-severity violations.
pub const DEFAULT_WEIGHT_MEDIUM: f64 = 0.5;

/// Default severity weight for low-severity violations.
pub const DEFAULT_WEIGHT_LOW: f64 = 0.25;

/// Default minimum compliance score (0-100) for a passing run.
pub const DEFAULT_MIN_SCORE: u8 = 0;

/// Years since the Baseline low date at which yearly enforcement reaches
/// `error`.
pub const ERROR_AGE_YEARS: i32 = 3;

/// Years since the Baseline low date at which yearly enforcement reaches
/// `warn`.
pub const WARN_AGE_YEARS: i32 = 2;

/// Years since the Baseline low date at which yearly enforcement reaches
/// `info`.
pub const INFO_AGE_YEARS: i32 = 1;

/// Earliest year the auto-configuration back-fill extends to. Baseline low
/// dates do not predate it.
pub const BASELINE_FLOOR_YEAR: i32 = 2015;

/// Hex length of stable violation identifiers.
pub const VIOLATION_ID_LEN: usize = 8;

/// Number of interop-priority feature IDs.
pub const INTEROP_PRIORITY_COUNT: usize = 19;

/// Feature IDs eligible for the interop-priority severity boost under
/// yearly enforcement. Curated from the cross-browser interop focus areas;
/// order is not significant.
pub const INTEROP_PRIORITY_FEATURES: [&str; INTEROP_PRIORITY_COUNT] = [
    "anchor-positioning",
    "container-queries",
    "has",
    "nesting",
    "view-transitions",
    "subgrid",
    "grid",
    "scrollbar-gutter",
    "scrollbar-width",
    "scrollbar-color",
    "scroll-driven-animations",
    "scope",
    "popover",
    "dialog",
    "datalist",
    "customized-built-in-elements",
    "file-system-access",
    "notifications",
    "web-bluetooth",
];
