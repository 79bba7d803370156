//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "relnotes.toml";

/// Loads and validates configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    debug!(
        host = %config.server.host,
        port = config.server.port,
        api_url = %config.github.api_url,
        token_env = %config.github.token_env,
        "configuration loaded"
    );
    Ok(config)
}

/// Finds and loads configuration from the current directory or parents.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config() -> ConfigResult<Config> {
    let current_dir = std::env::current_dir()?;
    find_and_load_config_from(&current_dir)
}

/// Finds and loads configuration starting from the given directory.
///
/// The nearest `relnotes.toml` wins; files further up are not merged.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();

    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
        .map_or_else(
            || Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME))),
            load_config,
        )
}

/// Loads configuration from an explicit path, or discovers it.
///
/// An explicit path must exist. Without one, a missing `relnotes.toml`
/// yields the default configuration.
///
/// # Errors
///
/// Returns an error if the explicit file is missing, or if any file found
/// cannot be parsed or validated.
pub fn load_or_default(explicit: Option<&Path>) -> ConfigResult<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match find_and_load_config() {
        Err(ConfigError::NotFound(path)) => {
            debug!(?path, "no configuration file found, using defaults");
            Ok(Config::default())
        }
        other => other,
    }
}
