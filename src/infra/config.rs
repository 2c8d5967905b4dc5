//! Infrastructure implementation of the `ConfigStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::KilnConfig;
use crate::domain::error::ConfigError;

/// Environment variable overriding the Kiln home directory.
pub const HOME_ENV: &str = "KILN_HOME";

/// Production implementation of `ConfigStore` backed by YAML files under
/// the Kiln home directory.
pub struct YamlConfigStore;

impl YamlConfigStore {
    /// Resolve the Kiln home directory: `$KILN_HOME` when set, otherwise
    /// `~/.kiln`.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn home() -> Result<PathBuf> {
        if let Ok(val) = std::env::var(HOME_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".kiln"))
    }

    /// Directory templates are resolved against: `<home>/templates`.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn templates_dir() -> Result<PathBuf> {
        Ok(Self::home()?.join("templates"))
    }

    fn read(path: &Path) -> Result<KilnConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<KilnConfig> {
        let path = Self::home()?.join("config.yaml");
        if !path.exists() {
            return Ok(KilnConfig::default());
        }
        Self::read(&path)
    }

    fn load_named(&self, name: &str) -> Result<KilnConfig> {
        let path = Self::home()?.join(format!("{name}.yaml"));
        if !path.exists() {
            return Err(ConfigError::NotFound {
                name: name.to_string(),
                path: path.display().to_string(),
            }
            .into());
        }
        Self::read(&path)
    }
}
