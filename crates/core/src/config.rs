use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content;

pub const DEFAULT_ROLE_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 400.0;
pub const DEFAULT_PROBE_LINE: f64 = 100.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("role list is empty")]
    NoRoles,
    #[error("role interval must be greater than zero")]
    ZeroInterval,
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Tunables for the view-state controller.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Period of the role rotator in milliseconds.
    pub role_interval_ms: u64,
    /// Scroll offset above which the scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    /// Viewport y coordinate of the line that decides the active section.
    pub probe_line: f64,
    /// Role labels cycled through in the hero banner.
    pub roles: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role_interval_ms: DEFAULT_ROLE_INTERVAL_MS,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            probe_line: DEFAULT_PROBE_LINE,
            roles: content::ROLES.iter().map(|&r| r.to_owned()).collect(),
        }
    }
}

impl Config {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roles.is_empty() {
            return Err(ConfigError::NoRoles);
        }
        if self.role_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        for (field, value) in [
            ("scroll_top_threshold", self.scroll_top_threshold),
            ("probe_line", self.probe_line),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    pub fn role_interval(&self) -> Duration {
        Duration::from_millis(self.role_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_takes_defaults() {
        let config = Config::from_json("{}").expect("defaults are valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.role_interval(), Duration::from_millis(3000));
        assert_eq!(config.scroll_top_threshold, 400.0);
        assert_eq!(config.probe_line, 100.0);
        assert_eq!(config.roles.len(), content::ROLES.len());
    }

    #[test]
    fn partial_override() {
        let config = Config::from_json(r#"{"roles": ["A", "B", "C"], "role_interval_ms": 50}"#)
            .expect("valid config");
        assert_eq!(config.roles, ["A", "B", "C"]);
        assert_eq!(config.role_interval_ms, 50);
        assert_eq!(config.probe_line, DEFAULT_PROBE_LINE);
    }

    #[test]
    fn rejects_empty_roles() {
        let err = Config::from_json(r#"{"roles": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoRoles));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = Config::from_json(r#"{"role_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval));
    }

    #[test]
    fn rejects_non_finite_threshold() {
        let config = Config {
            scroll_top_threshold: f64::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "scroll_top_threshold",
                ..
            })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Config::from_json("{ roles: "),
            Err(ConfigError::Json(_))
        ));
    }
}
