//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.aquamitra/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::language::DEFAULT_LANGUAGE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AquaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_language: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILE: &str = "aquamitra.log";
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub language: String,
    pub log_file: PathBuf,
    pub log_level: log::LevelFilter,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub language: Option<String>,
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

/// Returns the path to `~/.aquamitra/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".aquamitra").join("config.toml"))
}

/// Load config from `~/.aquamitra/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AquaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AquaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AquaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AquaConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<AquaConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AquaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# AquaMitra Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_language = "en"            # en, hi, mr, bn, ta, te, gu (or AQUAMITRA_LANGUAGE)

# [server]
# base_url = "http://localhost:8000" # Or set AQUAMITRA_BASE_URL

# [logging]
# file = "aquamitra.log"             # Or set AQUAMITRA_LOG_FILE
# level = "debug"                    # off, error, warn, info, debug, trace
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AquaConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &AquaConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("AQUAMITRA_BASE_URL"))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Language: CLI → env → config → default
    let language = cli
        .language
        .clone()
        .or_else(|| env("AQUAMITRA_LANGUAGE"))
        .or_else(|| config.general.default_language.clone())
        .filter(|code| !code.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    // Log file: env → config → default
    let log_file = env("AQUAMITRA_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let log_level = parse_level(
        config
            .logging
            .level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_LEVEL),
    );

    ResolvedConfig {
        base_url,
        language,
        log_file: PathBuf::from(log_file),
        log_level,
    }
}

/// Unknown level names fall back to `Debug`.
fn parse_level(level: &str) -> log::LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&AquaConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.language, "en");
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_config_values_override_defaults() {
        let config = AquaConfig {
            general: GeneralConfig {
                default_language: Some("ta".to_string()),
            },
            server: ServerConfig {
                base_url: Some("http://10.0.0.5:8000".to_string()),
            },
            logging: LoggingConfig {
                file: Some("/tmp/aqua.log".to_string()),
                level: Some("warn".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, "http://10.0.0.5:8000");
        assert_eq!(resolved.language, "ta");
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/aqua.log"));
        assert_eq!(resolved.log_level, log::LevelFilter::Warn);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = AquaConfig {
            server: ServerConfig {
                base_url: Some("http://from-file".to_string()),
            },
            general: GeneralConfig {
                default_language: Some("bn".to_string()),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = [
            ("AQUAMITRA_BASE_URL", "http://from-env"),
            ("AQUAMITRA_LANGUAGE", "te"),
        ]
        .into_iter()
        .collect();
        let lookup = |k: &str| env.get(k).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.language, "te");

        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            language: None,
        };
        let resolved = resolve_with_env(&config, &cli, lookup);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.language, "te");
    }

    #[test]
    fn test_blank_language_falls_back_to_default() {
        let cli = CliOverrides {
            base_url: None,
            language: Some("  ".to_string()),
        };
        let resolved = resolve_with_env(&AquaConfig::default(), &cli, no_env);
        assert_eq!(resolved.language, "en");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[server]
base_url = "http://192.168.1.100:8000"
"#;
        let config: AquaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://192.168.1.100:8000")
        );
        assert!(config.general.default_language.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
default_language = "mr"

[server]
base_url = "https://aquamitra.example"

[logging]
file = "client.log"
level = "info"
"#;
        let config: AquaConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.language, "mr");
        assert_eq!(resolved.base_url, "https://aquamitra.example");
        assert_eq!(resolved.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("aquamitra-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[server\nbase_url = 3").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config_from(Path::new("/definitely/not/here/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_parse_level_unknown_defaults_to_debug() {
        assert_eq!(parse_level("loud"), log::LevelFilter::Debug);
        assert_eq!(parse_level(" TRACE "), log::LevelFilter::Trace);
        assert_eq!(parse_level("off"), log::LevelFilter::Off);
    }
}
