//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`LINKBOARD_URL`, `LINKBOARD_TOKEN`,
//!    `LINKBOARD_TIMEOUT_SECS`)
//! 2. TOML file given with --config CLI flag
//! 3. ./linkboard.toml in the current directory
//! 4. $XDG_CONFIG_HOME/linkboard/linkboard.toml (or
//!    ~/.config/linkboard/linkboard.toml)
//! 5. Built-in defaults
//!
//! CLI flags are applied on top by the binary.

use crate::error::ConfigError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

mod defaults;
mod types;

use defaults::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BEARER_TOKEN, DEFAULT_CONFIG_TEMPLATE,
    DEFAULT_DASHBOARD_URL,
};
pub use types::{ApiConfig, Config, DisplayConfig, FetchConfig, GlobalConfigInitResult};
use types::FileConfig;

pub const ENV_URL: &str = "LINKBOARD_URL";
pub const ENV_TOKEN: &str = "LINKBOARD_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "LINKBOARD_TIMEOUT_SECS";

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    Explicit(PathBuf),
    Local,
    Global(PathBuf),
    BuiltInDefaults,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    debug!(?source, "loaded config source");
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_config_from_file_config(parsed, &env_lookup)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

fn resolve_config_from_file_config<FEnv>(
    parsed: FileConfig,
    env_lookup: &FEnv,
) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let api = &parsed.api;
    let token = match (normalized(api.token.as_deref()), normalized(api.token_env.as_deref())) {
        (Some(_), Some(_)) => {
            return Err(ConfigError::Invalid(
                "set only one of `api.token` or `api.token_env`".to_string(),
            ))
        }
        (Some(token), None) => token,
        (None, Some(var)) => env_lookup(&var)
            .and_then(|value| normalized(Some(&value)))
            .ok_or_else(|| {
                ConfigError::Invalid(format!("api.token_env `{var}` is not set or empty"))
            })?,
        (None, None) => DEFAULT_BEARER_TOKEN.to_string(),
    };

    let mut config = Config {
        api: ApiConfig {
            url: normalized(api.url.as_deref()).unwrap_or_else(|| DEFAULT_DASHBOARD_URL.to_string()),
            token,
            timeout_secs: api.timeout_secs.map(|secs| secs.max(1)),
        },
        fetch: FetchConfig {
            discard_stale_responses: parsed.fetch.discard_stale_responses.unwrap_or(false),
        },
        display: DisplayConfig::default(),
    };
    if let Some(color) = parsed.display.color {
        config.display.color = color;
    }
    if let Some(tab) = parsed.display.default_tab {
        config.display.default_tab = tab;
    }
    config.display.colors = parsed.display.colors;
    Ok(config)
}

fn apply_runtime_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = env_lookup(ENV_URL).and_then(|v| normalized(Some(&v))) {
        config.api.url = url;
    }
    if let Some(token) = env_lookup(ENV_TOKEN).and_then(|v| normalized(Some(&v))) {
        config.api.token = token;
    }
    if let Some(timeout) = env_lookup(ENV_TIMEOUT_SECS) {
        let parsed = timeout.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.api.timeout_secs = Some(parsed.max(1));
    }
    Ok(())
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Global config file
// ---------------------------------------------------------------------------

/// Return the default per-user config path (`~/.config/linkboard/linkboard.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Write the default template to the global config path.
///
/// - Without `force`, returns `AlreadyInitialized` if the file exists.
/// - With `force`, backs up the existing file next to it under a timestamped
///   name, then rewrites it from the template.
pub fn initialize_default_global_config(force: bool) -> Result<GlobalConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid(
            "unable to resolve default config path for ~/.config/linkboard/linkboard.toml"
                .to_string(),
        )
    })?;
    initialize_default_global_config_at_path(&path, force)
}

fn initialize_default_global_config_at_path(
    path: &Path,
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if path.exists() {
        if !force {
            return Ok(GlobalConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            });
        }
        let backup_path = timestamped_backup_path(path);
        std::fs::copy(path, &backup_path)?;
        std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        return Ok(GlobalConfigInitResult::Overwritten {
            path: path.to_path_buf(),
            backup_path,
        });
    }

    // create_new avoids clobbering if another process wins a race to create.
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
            Ok(GlobalConfigInitResult::Created {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Ok(GlobalConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

const MAX_BACKUP_ATTEMPTS: u32 = 100;

/// `<name>.<unix-secs>.bak` next to `path`, numbered when that name is taken.
fn timestamped_backup_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| CONFIG_FILE_NAME.into(), |n| n.to_string_lossy().into_owned());
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);

    let numbered = (1..MAX_BACKUP_ATTEMPTS).map(|n| format!("{name}.{stamp}.{n}.bak"));
    std::iter::once(format!("{name}.{stamp}.bak"))
        .chain(numbered)
        .map(|file_name| path.with_file_name(file_name))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| {
            path.with_file_name(format!("{name}.{stamp}.pid{}.bak", std::process::id()))
        })
}

/// Root directory for per-user config (`$XDG_CONFIG_HOME` or `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .as_deref()
        .and_then(|value| normalized(Some(value)))
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
