//! Command implementations

pub mod create;
pub mod delete;
pub mod status;
pub mod version;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::KilnConfig;

/// Resolve the effective configuration for a command's optional config name.
///
/// # Errors
///
/// Returns an error if the named configuration does not exist or a config
/// file fails to parse.
pub fn load_config(store: &impl ConfigStore, name: Option<&str>) -> Result<KilnConfig> {
    match name {
        Some(name) => store.load_named(name),
        None => store.load(),
    }
}
