use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;
use tracing::warn;

use crate::system::procfs::DEFAULT_PROC_ROOT;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub refresh_interval_secs: u64,
    pub default_sort: String,
    pub proc_root: PathBuf,
    pub theme: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_interval_secs: 2,
            default_sort: "cpu".to_string(),
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            theme: "dark".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub kill: String,
    pub sort_cpu: String,
    pub sort_memory: String,
    pub sort_pid: String,
    pub faster: String,
    pub slower: String,
    pub refresh: String,
    pub help: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            kill: "k".to_string(),
            sort_cpu: "c".to_string(),
            sort_memory: "m".to_string(),
            sort_pid: "p".to_string(),
            faster: "+".to_string(),
            slower: "-".to_string(),
            refresh: "r".to_string(),
            help: "?".to_string(),
        }
    }
}

/// Parses a keybind name from the config file: a single character or one
/// of the named keys.
pub fn parse_key(s: &str) -> Option<KeyCode> {
    let code = match s {
        "Enter" => KeyCode::Enter,
        "Esc" | "Escape" => KeyCode::Esc,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Delete" | "Del" => KeyCode::Delete,
        "Space" => KeyCode::Char(' '),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sysmon").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            warn!(path = %path.display(), %err, "invalid config, using defaults");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}
