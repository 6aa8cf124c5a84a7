// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use eventhub_core::{APP_NAME, ApiConfig, Session, SessionUser};
use tokio::fs;

const EVENTHUB_CONFIG_ENV: &str = "EVENTHUB_CONFIG";
const EVENTHUB_DEV_ENV: &str = "EVENTHUB_DEV";

/// Where the configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    Flag,
    Env,
    UserDir,
}

/// Reads the configuration from `--config`, `$EVENTHUB_CONFIG`, or the user
/// config directory, in that order.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let (path, source) = resolve_config_path(path)?;
    let config: Config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()?;

    tracing::debug!(
        path = %path.display(),
        ?source,
        signed_in = config.session.is_some(),
        "configuration loaded"
    );
    Ok(config)
}

fn resolve_config_path(flag: Option<PathBuf>) -> Result<(PathBuf, ConfigSource), Box<dyn Error>> {
    if let Some(path) = flag {
        return Ok((path, ConfigSource::Flag));
    }
    if let Ok(path) = std::env::var(EVENTHUB_CONFIG_ENV) {
        return Ok((PathBuf::from(path), ConfigSource::Env));
    }

    // A development checkout must not pick up the user's real session.
    if dev_mode() {
        return Err(format!(
            "{EVENTHUB_DEV_ENV} is set: pass --config or set {EVENTHUB_CONFIG_ENV} instead of \
             using the user configuration"
        )
        .into());
    }

    let path = get_config_dir()?.join(APP_NAME).join("config.toml");
    if !path.exists() {
        return Err(format!("No config found at: {}", path.display()).into());
    }
    Ok((path, ConfigSource::UserDir))
}

fn dev_mode() -> bool {
    let Ok(value) = std::env::var(EVENTHUB_DEV_ENV) else {
        return false;
    };

    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => true,
        "0" | "false" | "no" | "" => false,
        _ => {
            tracing::warn!(
                value = %value,
                "unrecognized {EVENTHUB_DEV_ENV} value, treating as unset"
            );
            false
        }
    }
}

/// Configuration of the command-line client.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Where the backend lives and how to authenticate against it.
    #[serde(default)]
    pub api: ApiConfig,

    /// The signed-in user. Absent means browsing anonymously.
    #[serde(default)]
    pub session: Option<SessionUser>,
}

impl Config {
    pub fn session(&self) -> Session {
        Session::from(self.session.clone())
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
