use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolmapsError};

/// Optional settings; the file layout conventions themselves are fixed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    /// Project root the conventional paths are resolved against
    pub root: Option<PathBuf>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicitly requested file must load
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let project_name = env!("CARGO_PKG_NAME");

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if let Some(config) = Self::try_load(&primary_config) {
                return Ok(config);
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if let Some(config) = Self::try_load(&fallback_config) {
            return Ok(config);
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn try_load(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
                None
            }
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ToolmapsError::Config(format!("failed to read {}: {}", path.display(), e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ToolmapsError::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        info!("Loaded config from: {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.log_level.is_none());
        assert!(config.root.is_none());
    }

    #[test]
    fn test_load_explicit_file() -> eyre::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("toolmaps.yml");
        fs::write(&path, "log_level: debug\nroot: /srv/it-tools\n")?;

        let config = Config::load(Some(&path))?;
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.root, Some(PathBuf::from("/srv/it-tools")));
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> eyre::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("toolmaps.yml");
        fs::write(&path, "log_level: info\n")?;

        let config = Config::load(Some(&path))?;
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(config.root.is_none());
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = PathBuf::from("/nonexistent/toolmaps.yml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ToolmapsError::Config(_)));
    }

    #[test]
    fn test_explicit_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("toolmaps.yml");
        fs::write(&path, "log_level: [unterminated\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }
}
