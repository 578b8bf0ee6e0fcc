// Configuration file handling

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".tassertrc.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportOptions,
}

/// Controls how failure messages are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Append a diff to equality failures whose values span several lines
    #[serde(default = "default_diff")]
    pub diff: bool,

    /// Colorize diffs
    #[serde(default)]
    pub color: bool,

    /// Truncate rendered values to this many characters (0 = unlimited)
    #[serde(default)]
    pub max_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            diff: default_diff(),
            color: false,
            max_width: 0,
        }
    }
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        config.report.clone()
    }
}

fn default_diff() -> bool {
    true
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Contexts never read the file on their own: pass the result to
    /// `Recorder::from_config` and friends.
    pub fn load() -> anyhow::Result<Option<Self>> {
        let cwd = std::env::current_dir().ok();
        let home = dirs::home_dir();
        Self::load_from_dirs(cwd.as_deref(), home.as_deref())
    }

    /// Load configuration from the first search root holding a config file
    pub fn load_from_dirs(
        cwd: Option<&Path>,
        home: Option<&Path>,
    ) -> anyhow::Result<Option<Self>> {
        // Check locations in order:
        // 1. .tassertrc.toml (current directory)
        // 2. ~/.tassertrc.toml (home directory)
        for path in [cwd, home].into_iter().flatten().map(|dir| dir.join(CONFIG_FILE_NAME)) {
            if path.exists() {
                tracing::trace!("Loading configuration from {}", path.display());
                let config = Self::load_from_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?;
                return Ok(Some(config));
            }
        }

        Ok(None)
    }

    /// Load configuration, falling back to defaults when none is found or it is invalid
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Ignoring configuration: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[report]
diff = false
color = true
max_width = 120
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert!(!config.report.diff);
        assert!(config.report.color);
        assert_eq!(config.report.max_width, 120);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("[report]\ncolor = true\n").expect("Failed to parse config");
        assert!(config.report.diff);
        assert!(config.report.color);
        assert_eq!(config.report.max_width, 0);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = Config::parse("[report]\ndiff = \"yes\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    fn write_config(dir: &Path, content: &str) {
        std::fs::write(dir.join(CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_current_dir_wins_over_home() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write_config(cwd.path(), "[report]\nmax_width = 8\n");
        write_config(home.path(), "[report]\nmax_width = 99\n");

        let config = Config::load_from_dirs(Some(cwd.path()), Some(home.path()))
            .unwrap()
            .unwrap();
        assert_eq!(config.report.max_width, 8);
    }

    #[test]
    fn test_home_is_fallback() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "[report]\ncolor = true\n");

        let config = Config::load_from_dirs(Some(cwd.path()), Some(home.path()))
            .unwrap()
            .unwrap();
        assert!(config.report.color);

        let config = Config::load_from_dirs(None, Some(home.path())).unwrap().unwrap();
        assert!(config.report.color);
    }

    #[test]
    fn test_no_config_found() {
        let cwd = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_from_dirs(Some(cwd.path()), None).unwrap(), None);
        assert_eq!(Config::load_from_dirs(None, None).unwrap(), None);
    }

    #[test]
    fn test_invalid_config_stops_search() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write_config(cwd.path(), "[report]\ndiff = 1\n");
        write_config(home.path(), "[report]\n");

        let err = Config::load_from_dirs(Some(cwd.path()), Some(home.path())).unwrap_err();
        assert!(format!("{:#}", err).contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let config = Config::default();
        let parsed = Config::parse(&config.to_toml()).unwrap();
        assert_eq!(parsed, config);
    }
}
