use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_APPLICATION_ID, DEFAULT_CARD_TITLE_PREFIX, LOCAL_CONFIG_PATH,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Skill identity and card labelling
    #[serde(default)]
    pub skill: SkillSettings,

    /// Output rendering
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSettings {
    /// Label prepended to every card title and body
    pub card_title_prefix: String,
    /// Application ids this skill answers; empty accepts any
    pub supported_application_ids: Vec<String>,
    /// Application id the simulator puts on its sessions
    pub application_id: String,
}

impl Default for SkillSettings {
    fn default() -> Self {
        Self {
            card_title_prefix: DEFAULT_CARD_TITLE_PREFIX.to_string(),
            supported_application_ids: vec![],
            application_id: DEFAULT_APPLICATION_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

/// Load configuration from multiple sources
///
/// Later sources win: defaults, global file, local file, `explicit`,
/// then `SPEECHLET_` environment variables (`__` separates sections).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let global_config = get_config_dir().ok().map(|dir| dir.join("config.toml"));
    let local_config = PathBuf::from(LOCAL_CONFIG_PATH);

    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(global) = global_config.filter(|p| p.exists()) {
        figment = figment.merge(Toml::file(global));
    }

    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    if let Some(path) = explicit {
        anyhow::ensure!(path.exists(), "Config file not found: {}", path.display());
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"));

    figment
        .extract()
        .context("Failed to load configuration")
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "session-speechlet") {
        Ok(proj_dirs.config_dir().to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        Ok(PathBuf::from(home).join(".config").join("session-speechlet"))
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
///
/// Returns the path and whether a new file was written.
pub fn init_config(path: Option<PathBuf>) -> Result<(PathBuf, bool)> {
    let path = match path {
        Some(p) => p,
        None => get_config_dir()?.join("config.toml"),
    };

    if path.exists() {
        return Ok((path, false));
    }

    save_config(&Config::default(), &path)?;
    Ok((path, true))
}
