use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/zidian/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZidianConfig {
    /// Override for the dictionary database path. If unset, the database
    /// lives under the XDG state directory (`~/.local/state/zidian/dict.db`).
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// Accept characters from the rare CJK extension blocks (Extension B and
    /// beyond). The common blocks are always accepted.
    #[serde(default = "default_allow_rare_ideographs")]
    pub allow_rare_ideographs: bool,
    /// Maximum number of rows printed by list commands (0 = unlimited).
    #[serde(default)]
    pub list_limit: usize,
}

fn default_allow_rare_ideographs() -> bool {
    true
}

impl Default for ZidianConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            allow_rare_ideographs: true,
            list_limit: 0,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("zidian")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ZidianConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ZidianConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ZidianConfig = toml::from_str(&data)?;
    Ok(cfg)
}
