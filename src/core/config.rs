//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.estate/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::profile::UserProfile;
use crate::core::router::Tab;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EstateConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_tab: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AssetsConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "estate.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_tab: Tab,
    pub assets_dir: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub profile: UserProfile,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_tab: Option<String>,
    pub assets_dir: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.estate/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".estate").join("config.toml"))
}

/// Load config from `~/.estate/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EstateConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<EstateConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EstateConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EstateConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<EstateConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: EstateConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Estate Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "home"                 # "home", "favorites" or "profile"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "estate.log"            # Or set ESTATE_LOG_FILE env var

# [assets]
# dir = "/path/to/art"               # <name>.txt files overriding the built-in pictures

# [profile]
# name = "John Doe"
# email = "john.doe@example.com"
# phone = "+1 (555) 123-4567"
# bio = "Real estate enthusiast looking for the perfect home."
# location = "Los Angeles, CA"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &EstateConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &EstateConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start tab: CLI → env → config → home
    let start_tab = cli
        .start_tab
        .clone()
        .or_else(|| env("ESTATE_START_TAB"))
        .or_else(|| config.general.start_tab.clone())
        .and_then(|name| {
            let tab = Tab::from_name(&name);
            if tab.is_none() {
                warn!("Unknown start tab {:?}, using home", name);
            }
            tab
        })
        .unwrap_or(Tab::Home);

    // Asset override directory: CLI → env → config
    let assets_dir = cli
        .assets_dir
        .clone()
        .or_else(|| env("ESTATE_ASSETS_DIR"))
        .or_else(|| config.assets.dir.clone())
        .map(PathBuf::from);

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("ESTATE_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| match level.trim().parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level {:?}, using default", level);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = env("ESTATE_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into();

    ResolvedConfig {
        start_tab,
        assets_dir,
        log_level,
        log_file,
        profile: resolve_profile(&config.profile),
    }
}

fn resolve_profile(config: &ProfileConfig) -> UserProfile {
    let defaults = UserProfile::default();
    UserProfile {
        name: config.name.clone().unwrap_or(defaults.name),
        email: config.email.clone().unwrap_or(defaults.email),
        phone: config.phone.clone().unwrap_or(defaults.phone),
        bio: config.bio.clone().unwrap_or(defaults.bio),
        location: config.location.clone().unwrap_or(defaults.location),
    }
}
