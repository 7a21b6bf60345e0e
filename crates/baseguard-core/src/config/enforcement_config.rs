//! Top-level enforcement configuration with 4-layer resolution.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{CategoryRules, EnforcementMode, EnforcementSettings, Exception};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::types::{BaselineThreshold, FeatureCategory, Severity};

/// Merged configuration consumed by the policy engine.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BASEGUARD_*`)
/// 3. Project config (`baseguard.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EnforcementConfig {
    pub rules: CategoryRules,
    pub enforcement: EnforcementSettings,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub mode: Option<EnforcementMode>,
    pub interop_priority: Option<bool>,
    pub fail_on: Option<Severity>,
    pub min_score: Option<u8>,
}

/// Non-fatal findings from config validation, logged at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// An allow-list entry with neither `feature` nor `files`. The entry is
    /// honored as written and exempts every occurrence in its category.
    UnconditionalException {
        category: FeatureCategory,
        index: usize,
    },
    /// A severity weight outside `[0, 1]`. The value is clamped at use.
    WeightOutOfRange { severity: Severity, value: f64 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnconditionalException { category, index } => write!(
                f,
                "rules.{category}.allowed-exceptions[{index}] has no feature or files and exempts every {category} occurrence"
            ),
            Self::WeightOutOfRange { severity, value } => write!(
                f,
                "enforcement.severity-weights.{severity} is {value}, outside [0, 1]; clamped at use"
            ),
        }
    }
}

impl EnforcementConfig {
    /// Load configuration with 4-layer resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. CLI flags
    /// 2. Environment variables (`BASEGUARD_*`)
    /// 3. Project config (`baseguard.toml` in `root`)
    /// 4. Compiled defaults
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        // Validate the final config; lints are logged, not fatal.
        for warning in config.validate()? {
            warn!(%warning, "config lint");
        }

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Returns the non-fatal lints; hard errors (values no run could
    /// interpret) come back as `ConfigError::ValidationFailed`.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        if let Some(score) = self.enforcement.min_score {
            if score > 100 {
                return Err(ConfigError::ValidationFailed {
                    field: "enforcement.min-score".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }

        let mut warnings = Vec::new();
        for (category, rule) in self.rules.iter() {
            for (index, exception) in rule.allowed_exceptions.iter().enumerate() {
                if exception.is_unconditional() {
                    warnings.push(ConfigWarning::UnconditionalException { category, index });
                }
            }
        }
        for (severity, value) in self.enforcement.severity_weights.configured() {
            if let Some(value) = value {
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    warnings.push(ConfigWarning::WeightOutOfRange { severity, value });
                }
            }
        }
        Ok(warnings)
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut EnforcementConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: EnforcementConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when populated. Arrays and tables replace wholesale;
    /// allow-lists from different layers are never unioned.
    fn merge(base: &mut EnforcementConfig, other: &EnforcementConfig) {
        // Category rules
        for category in FeatureCategory::all() {
            let other_rule = other.rules.rule(category);
            let base_rule = base.rules.rule_mut(category);
            if other_rule.baseline_threshold.is_some() {
                base_rule.baseline_threshold = other_rule.baseline_threshold;
            }
            if !other_rule.allowed_exceptions.is_empty() {
                base_rule.allowed_exceptions = other_rule.allowed_exceptions.clone();
            }
        }

        // Enforcement
        if other.enforcement.mode.is_some() {
            base.enforcement.mode = other.enforcement.mode;
        }
        if !other.enforcement.yearly_rules.is_empty() {
            base.enforcement.yearly_rules = other.enforcement.yearly_rules.clone();
        }
        if other.enforcement.interop_priority.is_some() {
            base.enforcement.interop_priority = other.enforcement.interop_priority;
        }
        if other.enforcement.severity_weights.high.is_some() {
            base.enforcement.severity_weights.high = other.enforcement.severity_weights.high;
        }
        if other.enforcement.severity_weights.medium.is_some() {
            base.enforcement.severity_weights.medium = other.enforcement.severity_weights.medium;
        }
        if other.enforcement.severity_weights.low.is_some() {
            base.enforcement.severity_weights.low = other.enforcement.severity_weights.low;
        }
        if other.enforcement.fail_on.is_some() {
            base.enforcement.fail_on = other.enforcement.fail_on;
        }
        if other.enforcement.min_score.is_some() {
            base.enforcement.min_score = other.enforcement.min_score;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BASEGUARD_ENFORCEMENT_MODE`, `BASEGUARD_CSS_THRESHOLD`, etc.
    fn apply_env_overrides(config: &mut EnforcementConfig) {
        if let Ok(val) = std::env::var("BASEGUARD_ENFORCEMENT_MODE") {
            if let Some(mode) = EnforcementMode::parse(&val) {
                config.enforcement.mode = Some(mode);
            }
        }
        if let Ok(val) = std::env::var("BASEGUARD_INTEROP_PRIORITY") {
            if let Ok(v) = val.parse::<bool>() {
                config.enforcement.interop_priority = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASEGUARD_FAIL_ON") {
            if let Some(severity) = Severity::parse(&val) {
                config.enforcement.fail_on = Some(severity);
            }
        }
        if let Ok(val) = std::env::var("BASEGUARD_MIN_SCORE") {
            if let Ok(v) = val.parse::<u8>() {
                config.enforcement.min_score = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASEGUARD_CSS_THRESHOLD") {
            if let Some(threshold) = BaselineThreshold::parse(&val) {
                config.rules.css.baseline_threshold = Some(threshold);
            }
        }
        if let Ok(val) = std::env::var("BASEGUARD_JS_THRESHOLD") {
            if let Some(threshold) = BaselineThreshold::parse(&val) {
                config.rules.javascript.baseline_threshold = Some(threshold);
            }
        }
        if let Ok(val) = std::env::var("BASEGUARD_HTML_THRESHOLD") {
            if let Some(threshold) = BaselineThreshold::parse(&val) {
                config.rules.html.baseline_threshold = Some(threshold);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut EnforcementConfig, cli: &CliOverrides) {
        if let Some(mode) = cli.mode {
            config.enforcement.mode = Some(mode);
        }
        if let Some(interop) = cli.interop_priority {
            config.enforcement.interop_priority = Some(interop);
        }
        if let Some(severity) = cli.fail_on {
            config.enforcement.fail_on = Some(severity);
        }
        if let Some(score) = cli.min_score {
            config.enforcement.min_score = Some(score);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Required maturity for a category, defaulting to `newly`.
    pub fn threshold_for(&self, category: FeatureCategory) -> BaselineThreshold {
        self.rules.rule(category).effective_threshold()
    }

    /// Allow-list entries scoped to a category.
    pub fn exceptions_for(&self, category: FeatureCategory) -> &[Exception] {
        &self.rules.rule(category).allowed_exceptions
    }
}
