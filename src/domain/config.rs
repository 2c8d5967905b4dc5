//! Domain types for Kiln configuration.
//!
//! Pure types only — no I/O, no async, no filesystem access. Loading and
//! path resolution live in `infra::config`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `$KILN_HOME/config.yaml` or in a named
/// file `$KILN_HOME/<name>.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KilnConfig {
    /// Stack identity settings.
    #[serde(default)]
    pub main: MainConfig,
    /// Provider connection settings.
    #[serde(default)]
    pub aws: AwsConfig,
    /// Completion polling settings.
    #[serde(default)]
    pub wait: WaitConfig,
}

/// Stack identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainConfig {
    /// Name of the stack to provision. Default: `KilnStack`.
    #[serde(default = "default_stack_name")]
    pub stack_name: String,
}

impl Default for MainConfig {
    fn default() -> Self {
        Self {
            stack_name: default_stack_name(),
        }
    }
}

/// Provider connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AwsConfig {
    /// Region override. When absent, the provider's default resolution
    /// chain (environment, shared config, instance metadata) decides.
    pub region: Option<String>,
}

/// Completion polling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Seconds between describe calls while waiting for a terminal state.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl WaitConfig {
    /// The poll interval as a `Duration`.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

fn default_stack_name() -> String {
    "KilnStack".to_string()
}

fn default_poll_interval_secs() -> u64 {
    1
}

// ── Unit tests ───────────────────────────────────────────────────────────────
