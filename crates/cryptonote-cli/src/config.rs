use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cryptonote_core::document::DEFAULT_DOCUMENT_NAME;
use cryptonote_core::SealedFormat;

/// Default name of the file written by `share`.
pub const DEFAULT_SHARE_FILE_NAME: &str = "CryptoNote_Share.txt";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NoteConfig {
    #[serde(default)]
    pub codec: CodecSection,
    #[serde(default)]
    pub editor: EditorSection,
    #[serde(default)]
    pub share: ShareSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CodecSection {
    #[serde(default)]
    pub format: FormatSetting,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EditorSection {
    pub default_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareSection {
    pub file_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormatSetting {
    #[default]
    Text,
    Binary,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_DOCUMENT_NAME.to_string(),
        }
    }
}

impl Default for ShareSection {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_SHARE_FILE_NAME.to_string(),
        }
    }
}

impl From<FormatSetting> for SealedFormat {
    fn from(value: FormatSetting) -> Self {
        match value {
            FormatSetting::Text => SealedFormat::FormatA,
            FormatSetting::Binary => SealedFormat::FormatB,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config file; a missing file yields the defaults.
pub fn read_config(path: &Path) -> anyhow::Result<NoteConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(NoteConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &NoteConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("cryptonote"));
        }
    }
    Ok(home_dir()?.join(".config").join("cryptonote"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
