//! Configuration system for Baseguard.
//! TOML-based, 4-layer resolution: CLI > env > project > defaults.

pub mod enforcement_config;
pub mod rules;
pub mod settings;

pub use enforcement_config::{CliOverrides, ConfigWarning, EnforcementConfig};
pub use rules::{CategoryRule, CategoryRules, Exception};
pub use settings::{EnforcementMode, EnforcementSettings, SeverityWeights};
