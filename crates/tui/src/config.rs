use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Snapshot opened when none is given on the command line.
    pub content: Option<PathBuf>,
    /// Log destination. The terminal belongs to the UI, so without this
    /// the interactive browser logs nothing.
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub theme: ThemeMode,
    /// Input poll interval.
    pub tick_ms: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content: None,
            log_file: None,
            log_level: "info".to_string(),
            theme: ThemeMode::Dark,
            tick_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    EnvPath(PathBuf),
    File(PathBuf),
    Default,
}

pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

impl FolioConfig {
    /// `--config`, then `$FOLIO_CONFIG`, then `./folio.toml`, then defaults.
    pub fn load(flag: Option<&Path>) -> anyhow::Result<(Self, ConfigSource)> {
        if let Some(path) = flag {
            let config = Self::load_from_file(path)?;
            return Ok((config, ConfigSource::Flag(path.to_path_buf())));
        }

        if let Ok(path_str) = env::var(CONFIG_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)
                .with_context(|| format!("invalid config {}", path.display())),
            _ => Self::parse_toml(&contents)
                .map_err(|err| anyhow!("invalid config {}: {}", path.display(), err)),
        }
    }

    pub fn parse_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &["folio.toml", "folio.json"];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(Path::to_path_buf)
    }
}
