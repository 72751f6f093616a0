//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.statnav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Screen;
use crate::core::announce::{
    DEFAULT_ENTRY_FORMAT, DEFAULT_FALLBACK_GROUP, DEFAULT_READ_ERROR_MESSAGE,
    DEFAULT_UNAVAILABLE_MESSAGE, Messages, TemplateReader, Transcript,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StatnavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub groups: GroupsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_screen: Option<String>,
    pub sheet: Option<String>,
    pub transcript_capacity: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpeechConfig {
    pub entry_format: Option<String>,
    pub fallback_group: Option<String>,
    pub unavailable_message: Option<String>,
    pub read_error_message: Option<String>,
}

/// Display-name overrides per screen, keyed by group key (`combat = "Battle"`).
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GroupsConfig {
    #[serde(default)]
    pub status: HashMap<String, String>,
    #[serde(default)]
    pub bestiary: HashMap<String, String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub screen: Screen,
    pub sheet_path: Option<PathBuf>,
    pub transcript_capacity: usize,
    pub entry_format: String,
    pub fallback_group: String,
    pub messages: Messages,
    pub status_names: HashMap<String, String>,
    pub bestiary_names: HashMap<String, String>,
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

/// Returns the path to `~/.statnav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".statnav").join("config.toml"))
}

/// Load config from `~/.statnav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StatnavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StatnavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StatnavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StatnavConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<StatnavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StatnavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# statnav Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_screen = "status"          # "status" or "bestiary" (STATNAV_SCREEN, --screen)
# sheet = "/path/to/sheet.toml"      # stat sheet to load (STATNAV_SHEET, --sheet)
# transcript_capacity = 50           # announcements kept in the transcript panel

# [speech]
# entry_format = "{label}: {value}"  # placeholders: {label}, {value}
# fallback_group = "Other"           # spoken for groups with no display name
# unavailable_message = "Navigation not available"
# read_error_message = "Error reading stat"

# [groups.status]                    # keys: status, attributes, combat, equipment
# combat = "Battle"

# [groups.bestiary]                  # keys: overview, stats, resistances, weaknesses, drops
# drops = "Loot"
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
///
/// `cli_screen` and `cli_sheet` are from CLI flags (None = not specified).
pub fn resolve(
    config: &StatnavConfig,
    cli_screen: Option<Screen>,
    cli_sheet: Option<&Path>,
) -> ResolvedConfig {
    // Screen: CLI → env → config → default
    let screen = cli_screen
        .or_else(|| parse_screen_setting(std::env::var("STATNAV_SCREEN").ok(), "STATNAV_SCREEN"))
        .or_else(|| parse_screen_setting(config.general.default_screen.clone(), "default_screen"))
        .unwrap_or_default();

    // Sheet: CLI → env → config → none (built-in demo)
    let sheet_path = cli_sheet
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("STATNAV_SHEET").ok().map(PathBuf::from))
        .or_else(|| config.general.sheet.as_ref().map(PathBuf::from));

    let speech = &config.speech;

    ResolvedConfig {
        screen,
        sheet_path,
        transcript_capacity: config
            .general
            .transcript_capacity
            .unwrap_or(Transcript::DEFAULT_CAPACITY)
            .max(1),
        entry_format: resolve_entry_format(speech.entry_format.as_deref()),
        fallback_group: speech
            .fallback_group
            .clone()
            .unwrap_or_else(|| DEFAULT_FALLBACK_GROUP.to_string()),
        messages: Messages {
            unavailable: speech
                .unavailable_message
                .clone()
                .unwrap_or_else(|| DEFAULT_UNAVAILABLE_MESSAGE.to_string()),
            read_error: speech
                .read_error_message
                .clone()
                .unwrap_or_else(|| DEFAULT_READ_ERROR_MESSAGE.to_string()),
        },
        status_names: config.groups.status.clone(),
        bestiary_names: config.groups.bestiary.clone(),
    }
}

fn parse_screen_setting(value: Option<String>, source: &str) -> Option<Screen> {
    let value = value?;
    let screen = Screen::parse(&value);
    if screen.is_none() {
        warn!("Ignoring unknown screen {:?} from {}", value, source);
    }
    screen
}

/// A configured format is only kept if it parses.
fn resolve_entry_format(configured: Option<&str>) -> String {
    match configured {
        Some(format) => match TemplateReader::parse(format) {
            Ok(_) => format.to_string(),
            Err(e) => {
                warn!("Invalid entry_format {:?}: {}; using default", format, e);
                DEFAULT_ENTRY_FORMAT.to_string()
            }
        },
        None => DEFAULT_ENTRY_FORMAT.to_string(),
    }
}
