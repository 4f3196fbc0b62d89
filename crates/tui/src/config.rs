use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_core::Config;
use serde::{Deserialize, Serialize};

/// Terminal-only settings, read from the same JSON file as the controller
/// config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Page units covered by one terminal row. The controller thresholds
    /// (probe line, scroll-top offset) are expressed in page units.
    pub units_per_row: f64,
    /// JSON file holding the theme preference. In-memory when unset.
    pub theme_path: Option<PathBuf>,
    /// Log file. Logging is off when unset: the terminal owns stdout.
    pub log_path: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            units_per_row: 20.0,
            theme_path: None,
            log_path: None,
        }
    }
}

/// Controller and terminal settings parsed from one file.
pub fn load(path: Option<&Path>) -> Result<(Config, TuiConfig)> {
    let Some(path) = path else {
        return Ok((Config::default(), TuiConfig::default()));
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn parse(text: &str) -> Result<(Config, TuiConfig)> {
    let config = Config::from_json(text)?;
    let tui: TuiConfig = serde_json::from_str(text)?;
    anyhow::ensure!(
        tui.units_per_row.is_finite() && tui.units_per_row > 0.0,
        "units_per_row must be a positive number"
    );
    Ok((config, tui))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_defaults() {
        let (config, tui) = load(None).expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(tui, TuiConfig::default());
    }

    #[test]
    fn one_file_feeds_both_configs() {
        let (config, tui) = parse(
            r#"{"role_interval_ms": 1000, "units_per_row": 16, "theme_path": "/tmp/theme.json"}"#,
        )
        .expect("valid config");
        assert_eq!(config.role_interval_ms, 1000);
        assert_eq!(tui.units_per_row, 16.0);
        assert_eq!(tui.theme_path, Some(PathBuf::from("/tmp/theme.json")));
        assert_eq!(tui.log_path, None);
    }

    #[test]
    fn rejects_bad_row_height() {
        assert!(parse(r#"{"units_per_row": 0}"#).is_err());
        assert!(parse(r#"{"units_per_row": -4}"#).is_err());
    }

    #[test]
    fn controller_errors_surface() {
        assert!(parse(r#"{"roles": []}"#).is_err());
    }
}
