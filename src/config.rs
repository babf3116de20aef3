//! Project configuration (appicon.yaml).
//!
//! Every field is optional. Without a config file the tool renders the stock
//! icon into `app-icon/` at the standard iOS sizes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::types::{dedup_sizes, IconStyle, BASE_SIZE, REQUIRED_SIZES};

/// Config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "appicon.yaml";

/// Settings loaded from appicon.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the icon files are written to.
    pub output: PathBuf,

    /// Source image for `appicon resize`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Edge length the procedural icon is drawn at.
    pub base_size: u32,

    /// Edge lengths to export.
    pub sizes: Vec<u32>,

    pub style: IconStyle,
}

fn default_output() -> PathBuf {
    PathBuf::from("app-icon")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            source: None,
            base_size: BASE_SIZE,
            sizes: REQUIRED_SIZES.to_vec(),
            style: IconStyle::default(),
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse and validate config YAML.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for a command: an explicit path must exist, the
    /// default file is used only if present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_size == 0 {
            return Err(IconError::Config {
                message: "base_size must be greater than 0".to_string(),
                help: None,
            });
        }

        if self.sizes.is_empty() {
            return Err(IconError::Config {
                message: "sizes must list at least one size".to_string(),
                help: Some(format!("The default is {:?}", REQUIRED_SIZES)),
            });
        }

        if self.sizes.contains(&0) {
            return Err(IconError::Config {
                message: "sizes must all be greater than 0".to_string(),
                help: None,
            });
        }

        self.style.validate()
    }

    /// Sizes to export with duplicates removed.
    pub fn effective_sizes(&self) -> Vec<u32> {
        dedup_sizes(&self.sizes)
    }

    /// Render to YAML for `appicon init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| IconError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("output: build/icons").unwrap();

        assert_eq!(config.output, PathBuf::from("build/icons"));
        assert_eq!(config.sizes, REQUIRED_SIZES.to_vec());
        assert_eq!(config.base_size, 1024);
        assert!(config.source.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
output: Assets.xcassets/AppIcon.appiconset
source: artwork/icon.png
base_size: 512
sizes: [512, 180, 60]
style:
  background_top: "#112233"
  rule: "#FFFFFF40"
  bars: 5
"##;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.source, Some(PathBuf::from("artwork/icon.png")));
        assert_eq!(config.base_size, 512);
        assert_eq!(config.sizes, vec![512, 180, 60]);
        assert_eq!(config.style.background_top, Colour::rgb(0x11, 0x22, 0x33));
        assert_eq!(config.style.rule, Colour::new(255, 255, 255, 0x40));
        assert_eq!(config.style.bars, 5);
        assert_eq!(config.style.wave_outer, IconStyle::default().wave_outer);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = Config::parse("sizes: [180, 0]").unwrap_err();
        assert!(matches!(err, IconError::Config { .. }));
    }

    #[test]
    fn test_rejects_zero_base_size() {
        assert!(Config::parse("base_size: 0").is_err());
    }

    #[test]
    fn test_rejects_empty_sizes() {
        assert!(Config::parse("sizes: []").is_err());
    }

    #[test]
    fn test_rejects_bad_style() {
        assert!(Config::parse("style:\n  bars: 1").is_err());
        assert!(Config::parse("style:\n  page_top: blue").is_err());
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = Config::parse("sizes: [1, 2").unwrap_err();
        assert!(matches!(err, IconError::Config { .. }));
    }

    #[test]
    fn test_effective_sizes_dedups() {
        let config = Config {
            sizes: vec![60, 120, 60],
            ..Default::default()
        };
        assert_eq!(config.effective_sizes(), vec![60, 120]);
    }

    #[test]
    fn test_yaml_round_trip_of_defaults() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("#2980B9"));
        assert_eq!(Config::parse(&yaml).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_reads_default_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "output: icons").unwrap();

        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("icons"));
    }

    #[test]
    fn test_discover_explicit_missing_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("custom.yaml");
        assert!(matches!(
            Config::discover(Some(&missing), dir.path()),
            Err(IconError::Io { .. })
        ));
    }
}
