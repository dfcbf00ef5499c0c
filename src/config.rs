use crate::domain::{default_release_types, ReleaseRule, ReleaseTypes};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Represents the complete configuration for commit-analyzer.
///
/// Contains the release type ordering and the custom release rules checked
/// before the default rules.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Recognized release types, highest severity first
    #[serde(default = "default_release_types")]
    pub release_types: Vec<String>,

    #[serde(default)]
    pub release_rules: Vec<ReleaseRule>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release_types: default_release_types(),
            release_rules: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Build the release type ordering described by this configuration
    pub fn ordering(&self) -> Result<ReleaseTypes> {
        ReleaseTypes::new(self.release_types.clone())
    }

    /// Check every release rule against the ordering and compile its patterns.
    ///
    /// # Returns
    /// * `Ok(ReleaseTypes)` - The validated ordering
    /// * `Err(AnalyzerError::Configuration)` - Bad ordering or unknown release type
    /// * `Err(AnalyzerError::Pattern)` - A rule field holds an invalid regex
    pub fn validate(&self) -> Result<ReleaseTypes> {
        let ordering = self.ordering()?;
        for rule in &self.release_rules {
            ordering.check(rule.release.as_deref())?;
            rule.patterns()?;
        }
        Ok(ordering)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commitanalyzer.toml` in current directory
/// 3. `.commitanalyzer.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./commitanalyzer.toml").exists() {
        fs::read_to_string("./commitanalyzer.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".commitanalyzer.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzerError;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.release_types, default_release_types());
        assert!(config.release_rules.is_empty());
        assert_eq!(config.validate().unwrap().highest(), "major");
    }

    #[test]
    fn test_parse_rules() {
        let config = Config::from_toml(
            r#"
[[release_rules]]
type = "docs"
scope = "/README/"
release = "patch"

[[release_rules]]
type = "refactor"
release = false

[[release_rules]]
breaking = true
release = "major"
"#,
        )
        .unwrap();

        assert_eq!(config.release_types, default_release_types());
        assert_eq!(config.release_rules.len(), 3);
        assert_eq!(config.release_rules[0].fields.get("type"), Some(&json!("docs")));
        assert_eq!(config.release_rules[1].release, None);
        assert!(config.release_rules[2].breaking);
        assert!(config.release_rules[2].fields.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_nested_rule() {
        let config = Config::from_toml(
            r#"
[[release_rules]]
release = "major"
notes = [{ title = "/BREAKING/" }]
"#,
        )
        .unwrap();
        assert_eq!(
            config.release_rules[0].fields.get("notes"),
            Some(&json!([{"title": "/BREAKING/"}]))
        );
    }

    #[test]
    fn test_custom_release_types() {
        let config = Config::from_toml(r#"release_types = ["minor", "patch"]"#).unwrap();
        let ordering = config.validate().unwrap();
        assert_eq!(ordering.highest(), "minor");
    }

    #[test]
    fn test_validate_unknown_release() {
        let config = Config::from_toml(
            r#"
[[release_rules]]
type = "feat"
release = "huge"
"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AnalyzerError::Configuration(_)));
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn test_validate_invalid_pattern() {
        let config = Config::from_toml(
            r#"
[[release_rules]]
scope = "/(unclosed/"
release = "patch"
"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AnalyzerError::Pattern { ref field, .. } if field == "scope"));
    }

    #[test]
    fn test_validate_empty_release_types() {
        let config = Config::from_toml("release_types = []").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_release_true_rejected() {
        let result = Config::from_toml(
            r#"
[[release_rules]]
release = true
"#,
        );
        assert!(matches!(result, Err(AnalyzerError::Toml(_))));
    }
}
