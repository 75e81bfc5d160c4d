use crate::types::ColorMode;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 32400;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_HOST: &str = "localhost";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. NOWPLAYING_CONFIG environment variable (with tilde expansion)
/// 3. `nowplaying/config.toml` under the user config directory
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("NOWPLAYING_CONFIG")
        && !env_path.is_empty()
    {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("nowplaying").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub hosts: Vec<String>,
    pub port: u16,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub columns: Option<usize>,
    pub color: ColorMode,
    pub verbose: bool,
    pub leader: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts: vec![DEFAULT_HOST.to_string()],
            port: DEFAULT_PORT,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            columns: None,
            color: ColorMode::Auto,
            verbose: false,
            leader: nowplaying_core::text::DEFAULT_LEADER.to_string(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it does not exist.
    ///
    /// A path given on the command line must exist.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let Some(path) = resolve_config_path(explicit_path) else {
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit_path.is_some() {
                bail!("config file {} does not exist", path.display());
            }
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        config.leader_char()?;
        Ok(config)
    }

    pub fn leader_char(&self) -> Result<char> {
        let mut chars = self.leader.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => bail!(
                "`leader` must be exactly one character, got {:?}",
                self.leader
            ),
        }
    }
}
