//! TOML Configuration File Support
//!
//! Centralized configuration loading, with an optional TOML file at
//! `$XDG_CONFIG_HOME/sokkaverse/sokkaverse.toml`.
//!
//! # Configuration Priority
//!
//! Values are applied with the following priority (highest first):
//! 1. CLI arguments ([`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [routing]
//! base_path = "/portfolio"
//!
//! [boot]
//! cadence_ms = 45
//! buffer_ms = 500
//! loader_secs = 6
//! advance_policy = "timed"
//!
//! [transit]
//! duration_ms = 5500
//! grace_ms = 300
//!
//! [display]
//! fps = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routes::BasePath;
use crate::stage::{AdvancePolicy, StageTimings};
use crate::transit::DEFAULT_FLIGHT;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Routing section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingToml {
    /// Prefix for every route (sub-path deployment)
    pub base_path: Option<String>,
}

/// Boot section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BootToml {
    /// Typed-text cadence in milliseconds per character
    pub cadence_ms: Option<u64>,

    /// Slack after a typed line, in milliseconds
    pub buffer_ms: Option<u64>,

    /// Loader duration in seconds
    pub loader_secs: Option<u64>,

    /// How typing stages advance
    pub advance_policy: Option<AdvancePolicy>,
}

/// Transit section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitToml {
    /// Flight time in milliseconds
    pub duration_ms: Option<u64>,

    /// Delay between arrival and navigation, in milliseconds
    pub grace_ms: Option<u64>,
}

/// Display section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToml {
    /// Target frames per second of the surface
    pub fps: Option<u32>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SokkaverseToml {
    /// Routing section
    pub routing: RoutingToml,

    /// Boot section
    pub boot: BootToml,

    /// Transit section
    pub transit: TransitToml,

    /// Display section
    pub display: DisplayToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration
#[derive(Clone, Debug)]
pub struct SokkaverseConfig {
    /// Route prefix
    pub base_path: BasePath,

    /// Boot sequence timings
    pub timings: StageTimings,

    /// How typing stages advance
    pub advance_policy: AdvancePolicy,

    /// Ship flight time
    pub transit_duration: Duration,

    /// Delay between arrival and navigation
    pub arrival_grace: Duration,

    /// Surface frame rate
    pub fps: u32,

    /// Run through every boot stage without waiting
    pub skip_boot: bool,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for SokkaverseConfig {
    fn default() -> Self {
        Self {
            base_path: BasePath::default(),
            timings: StageTimings::default(),
            advance_policy: AdvancePolicy::Timed,
            transit_duration: DEFAULT_FLIGHT,
            arrival_grace: Duration::from_millis(300),
            fps: 30,
            skip_boot: false,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl SokkaverseConfig {
    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Frame duration implied by `fps`
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Check invariants the rest of the app relies on
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timings.cadence.is_zero() {
            return Err(ConfigError::ValidationError(
                "boot.cadence_ms must be greater than zero".into(),
            ));
        }
        if !(1..=120).contains(&self.fps) {
            return Err(ConfigError::ValidationError(format!(
                "display.fps must be between 1 and 120, got {}",
                self.fps
            )));
        }
        if self.transit_duration.is_zero() {
            return Err(ConfigError::ValidationError(
                "transit.duration_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority)
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(base) = &overrides.base_path {
            self.base_path = BasePath::new(base);
            self.source = ConfigSource::Cli;
        }
        if let Some(policy) = overrides.advance_policy {
            self.advance_policy = policy;
            self.source = ConfigSource::Cli;
        }
        if let Some(fps) = overrides.fps {
            self.fps = fps;
            self.source = ConfigSource::Cli;
        }
        if overrides.skip_boot {
            self.skip_boot = true;
            self.source = ConfigSource::Cli;
        }
    }
}

/// Values supplied on the command line
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// `--base-path`
    pub base_path: Option<String>,
    /// `--advance-policy`
    pub advance_policy: Option<AdvancePolicy>,
    /// `--fps`
    pub fps: Option<u32>,
    /// `--skip-boot`
    pub skip_boot: bool,
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/sokkaverse/sokkaverse.toml` or
/// `~/.config/sokkaverse/sokkaverse.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sokkaverse").join("sokkaverse.toml"))
}

/// Load configuration from the default path, environment and defaults
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
/// A missing config file is not an error (defaults are used).
pub fn load_config() -> Result<SokkaverseConfig, ConfigError> {
    load_config_from_path(default_config_path().as_deref())
}

/// Load configuration from a specific path, then the process environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<&Path>) -> Result<SokkaverseConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration with an explicit environment lookup
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_with_env<F>(path: Option<&Path>, env: F) -> Result<SokkaverseConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = SokkaverseConfig::default();

    if let Some(config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.to_path_buf(),
                    source: e,
                })?;

            let toml_config: SokkaverseToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.to_path_buf());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut SokkaverseConfig, toml: &SokkaverseToml) {
    if let Some(base) = &toml.routing.base_path {
        config.base_path = BasePath::new(base);
    }

    if let Some(ms) = toml.boot.cadence_ms {
        config.timings.cadence = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.boot.buffer_ms {
        config.timings.buffer = Duration::from_millis(ms);
    }
    if let Some(secs) = toml.boot.loader_secs {
        config.timings.loader = Duration::from_secs(secs);
    }
    if let Some(policy) = toml.boot.advance_policy {
        config.advance_policy = policy;
    }

    if let Some(ms) = toml.transit.duration_ms {
        config.transit_duration = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.transit.grace_ms {
        config.arrival_grace = Duration::from_millis(ms);
    }

    if let Some(fps) = toml.display.fps {
        config.fps = fps;
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config<F>(config: &mut SokkaverseConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let millis = |key: &str| env(key).and_then(|v| v.trim().parse::<u64>().ok());

    if let Some(base) = env("SOKKAVERSE_BASE_PATH") {
        config.base_path = BasePath::new(&base);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = millis("SOKKAVERSE_CADENCE_MS") {
        config.timings.cadence = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = millis("SOKKAVERSE_BUFFER_MS") {
        config.timings.buffer = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(secs) = millis("SOKKAVERSE_LOADER_SECS") {
        config.timings.loader = Duration::from_secs(secs);
        config.source = ConfigSource::Env;
    }
    if let Some(raw) = env("SOKKAVERSE_ADVANCE_POLICY") {
        match raw.parse::<AdvancePolicy>() {
            Ok(policy) => {
                config.advance_policy = policy;
                config.source = ConfigSource::Env;
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring SOKKAVERSE_ADVANCE_POLICY"),
        }
    }
    if let Some(ms) = millis("SOKKAVERSE_TRANSIT_MS") {
        config.transit_duration = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = millis("SOKKAVERSE_GRACE_MS") {
        config.arrival_grace = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(fps) = env("SOKKAVERSE_FPS").and_then(|v| v.trim().parse::<u32>().ok()) {
        config.fps = fps;
        config.source = ConfigSource::Env;
    }
}
