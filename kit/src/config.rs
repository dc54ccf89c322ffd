use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

use label_core::{Catalog, LabelResolver, Locale, system_locale};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub enum LogLevel {
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LabelConfig {
    /// Directory of `<locale>.toml` catalogs. Relative paths are taken
    /// from the directory holding the config file.
    pub catalog_dir: PathBuf,
    /// Active locale; the system locale when unset.
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub fallback_locale: Locale,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl LabelConfig {
    pub fn from(file_path: &impl AsRef<Path>) -> Result<Self> {
        let config_path = Path::new(file_path.as_ref());
        let ext = config_path.extension().and_then(|e| e.to_str());
        if ![Some("yaml"), Some("yml")].contains(&ext) {
            return Err(anyhow!(config::ConfigError::NotFound(
                config_path.to_string_lossy().into_owned(),
            )));
        }
        if !config_path.exists() {
            return Err(anyhow!(config::ConfigError::NotFound(
                config_path.to_string_lossy().into_owned(),
            )));
        }
        let config_path = config_path
            .canonicalize()
            .with_context(|| format!("failed to resolve {}", config_path.display()))?;
        let mut config: LabelConfig = config::Config::builder()
            .add_source(config::File::from(config_path.as_path()))
            .build()?
            .try_deserialize()
            .with_context(|| format!("invalid config {}", config_path.display()))?;
        config.base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        debug!("Loaded config {}", config_path.display());
        Ok(config)
    }

    pub fn active_locale(&self) -> Locale {
        self.locale.clone().unwrap_or_else(system_locale)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.base_dir.join(&self.catalog_dir)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| self.base_dir.join(dir))
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        debug!("Loading catalogs from {}", path.display());
        Catalog::from_dir(&path)
            .with_context(|| format!("failed to load catalogs from {}", path.display()))
    }

    /// Load the catalogs and build a resolver for `locale`, or for the
    /// configured active locale when `None`.
    pub fn resolver(&self, locale: Option<Locale>) -> Result<LabelResolver> {
        let catalog = self.load_catalog()?;
        let locale = locale.unwrap_or_else(|| self.active_locale());
        Ok(LabelResolver::new(catalog, locale).with_fallback_locale(self.fallback_locale.clone()))
    }
}
