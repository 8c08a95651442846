use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::access::VisibilityPolicy;

pub const CONFIG_FILE: &str = ".relato.toml";

/// Tool configuration loaded from `.relato.toml`. Every field is optional;
/// missing values fall back to the reference thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatoConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Admin rows strictly above this value render as priority.
    #[serde(default = "default_priority_threshold")]
    pub priority: f64,

    /// Standard users see rows at or below this value.
    #[serde(default = "default_standard_limit")]
    pub standard_limit: f64,
}

fn default_priority_threshold() -> f64 {
    1000.0
}

fn default_standard_limit() -> f64 {
    500.0
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            priority: default_priority_threshold(),
            standard_limit: default_standard_limit(),
        }
    }
}

impl ThresholdConfig {
    pub fn policy(&self) -> VisibilityPolicy {
        VisibilityPolicy {
            priority_threshold: self.priority,
            standard_value_limit: self.standard_limit,
        }
    }
}

/// Load configuration from `.relato.toml` in the current directory. A
/// missing file is not an error; a malformed one is reported and skipped.
pub fn load_config() -> RelatoConfig {
    try_load_config_from_path(Path::new(CONFIG_FILE)).unwrap_or_else(|| {
        log::debug!("no {CONFIG_FILE} found, using default config");
        RelatoConfig::default()
    })
}

fn try_load_config_from_path(config_path: &Path) -> Option<RelatoConfig> {
    let contents = fs::read_to_string(config_path).ok()?;

    match toml::from_str(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: invalid {}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Process-wide configuration, loaded once.
pub fn get_config() -> &'static RelatoConfig {
    static CONFIG: OnceLock<RelatoConfig> = OnceLock::new();
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_reference_thresholds() {
        let config = RelatoConfig::default();
        assert_eq!(config.thresholds.priority, 1000.0);
        assert_eq!(config.thresholds.standard_limit, 500.0);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: RelatoConfig = toml::from_str("").unwrap();
        assert_eq!(config, RelatoConfig::default());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config: RelatoConfig = toml::from_str(
            r#"
            [thresholds]
            priority = 2000.0
            "#,
        )
        .unwrap();
        assert_eq!(config.thresholds.priority, 2000.0);
        assert_eq!(config.thresholds.standard_limit, 500.0);
    }

    #[test]
    fn thresholds_convert_to_policy() {
        let config: RelatoConfig = toml::from_str(
            r#"
            [thresholds]
            priority = 750.0
            standard_limit = 250.0
            "#,
        )
        .unwrap();
        let policy = config.thresholds.policy();
        assert_eq!(policy.priority_threshold, 750.0);
        assert_eq!(policy.standard_value_limit, 250.0);
    }

    #[test]
    fn missing_file_falls_back_to_none() {
        assert_eq!(
            try_load_config_from_path(Path::new("definitely-not-here.toml")),
            None
        );
    }
}
