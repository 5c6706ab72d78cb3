//! Configuration types for the uisnap fixture runner.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Runner configuration loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Restrict iteration to one example, formatted as `file#ComponentName`.
    /// Without a `#` separator no component restriction is applied.
    pub only: Option<String>,

    /// CSS-like selector overriding how the rendered root is located
    pub root_element_selector: Option<String>,

    /// Maximum time to wait for rendered content to appear, in milliseconds
    pub async_timeout_ms: u64,

    /// Polling interval while waiting for content, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            only: None,
            root_element_selector: None,
            async_timeout_ms: 5000,
            poll_interval_ms: 10,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: RunnerConfig = serde_yaml::from_str(yaml)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.async_timeout_ms == 0 {
            return Err(crate::Error::Config(
                "async_timeout_ms must be > 0".to_string(),
            ));
        }

        if self.poll_interval_ms == 0 {
            return Err(crate::Error::Config(
                "poll_interval_ms must be > 0".to_string(),
            ));
        }

        if let Some(selector) = &self.root_element_selector {
            if selector.trim().is_empty() {
                return Err(crate::Error::Config(
                    "root_element_selector must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Component restriction parsed from the `only` option.
    ///
    /// The option is formatted as `file#ComponentName`; everything after the
    /// `#` names the component. An `only` value without a `#`, or with
    /// nothing after it, applies no component restriction.
    pub fn only_component(&self) -> Option<&str> {
        self.only
            .as_deref()?
            .split('#')
            .nth(1)
            .filter(|component| !component.is_empty())
    }

    /// Content wait timeout as a `Duration`.
    pub fn async_timeout(&self) -> Duration {
        Duration::from_millis(self.async_timeout_ms)
    }

    /// Polling interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert!(config.only.is_none());
        assert!(config.root_element_selector.is_none());
        assert_eq!(config.async_timeout_ms, 5000);
        assert_eq!(config.poll_interval_ms, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
only: "src/button.js#Button"
root_element_selector: ".mount-point"
async_timeout_ms: 1000
poll_interval_ms: 20
"#;
        let config = RunnerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.only.as_deref(), Some("src/button.js#Button"));
        assert_eq!(config.root_element_selector.as_deref(), Some(".mount-point"));
        assert_eq!(config.async_timeout_ms, 1000);
        assert_eq!(config.poll_interval_ms, 20);
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = RunnerConfig::from_yaml("async_timeout_ms: 250").unwrap();
        assert_eq!(config.async_timeout_ms, 250);
        assert_eq!(config.poll_interval_ms, 10);
        assert!(config.only.is_none());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result = RunnerConfig::from_yaml("async_timeout_ms: [not, a, number]");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = RunnerConfig {
            async_timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_poll_interval() {
        let config = RunnerConfig {
            poll_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_selector() {
        let config = RunnerConfig {
            root_element_selector: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_only_component() {
        let config = RunnerConfig {
            only: Some("src/button.js#Button".to_string()),
            ..Default::default()
        };
        assert_eq!(config.only_component(), Some("Button"));
    }

    #[test]
    fn test_only_component_without_separator() {
        let config = RunnerConfig {
            only: Some("src/button.js".to_string()),
            ..Default::default()
        };
        assert_eq!(config.only_component(), None);
    }

    #[test]
    fn test_only_component_empty_after_separator() {
        let config = RunnerConfig {
            only: Some("src/button.js#".to_string()),
            ..Default::default()
        };
        assert_eq!(config.only_component(), None);
    }

    #[test]
    fn test_only_component_unset() {
        let config = RunnerConfig::default();
        assert_eq!(config.only_component(), None);
    }

    #[test]
    fn test_durations() {
        let config = RunnerConfig {
            async_timeout_ms: 50,
            poll_interval_ms: 10,
            ..Default::default()
        };
        assert_eq!(config.async_timeout(), Duration::from_millis(50));
        assert_eq!(config.poll_interval(), Duration::from_millis(10));
    }
}
