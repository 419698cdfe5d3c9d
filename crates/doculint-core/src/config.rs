//! Configuration types for doculint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for doculint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Conventional names behind the entry-point and initializer exemptions.
    #[serde(default)]
    pub conventions: Conventions,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }
}

/// Conventional names that exempt a package or function from doc rules.
///
/// Exemptions match these names exactly; nothing else about the code is
/// consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conventions {
    /// Name of the program-entry package.
    #[serde(default = "default_main")]
    pub entry_package: String,

    /// Name of the program-entry function inside the entry package.
    #[serde(default = "default_main")]
    pub entry_function: String,

    /// Name of automatic package-initializer functions.
    #[serde(default = "default_init")]
    pub initializer_function: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            entry_package: default_main(),
            entry_function: default_main(),
            initializer_function: default_init(),
        }
    }
}

fn default_main() -> String {
    "main".to_string()
}

fn default_init() -> String {
    "init".to_string()
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.conventions.entry_package, "main");
        assert_eq!(config.conventions.entry_function, "main");
        assert_eq!(config.conventions.initializer_function, "init");
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("doculint"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[conventions]
entry_package = "app"

[rules.doculint]
enabled = true
severity = "warning"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.conventions.entry_package, "app");
        assert_eq!(config.conventions.entry_function, "main");
        assert!(config.is_rule_enabled("doculint"));
        assert_eq!(config.rule_severity("doculint"), Some(Severity::Warning));
    }

    #[test]
    fn test_disabled_rule() {
        let config = Config::parse("[rules.doculint]\nenabled = false\n").expect("parse");
        assert!(!config.is_rule_enabled("doculint"));
        assert_eq!(config.rule_severity("doculint"), None);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::parse("[conventions\n").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/doculint.toml"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
