//! File-based configuration provider (YAML)
//!
//! Supports user-level (~/.config/tempmail/config.yaml) and workspace-level
//! (.config/tempmail/config.yaml) config.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::logging::{NoOpLogger, SharedLogger};
use crate::{log_debug, log_error};
use crate::providers::{validate_provider, MailProvider, ProviderSettings};
use super::traits::{ConfigProvider, ConfigError, ConfigResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Selected provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_provider: Option<MailProvider>,

    /// Per-provider settings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<ProviderSettings>,
}

/// On-disk shape before provider identifiers are checked
#[derive(Debug, Deserialize, Default)]
struct RawConfigFile {
    #[serde(default)]
    mail_provider: Option<String>,
    #[serde(default)]
    providers: Vec<RawProviderSettings>,
}

#[derive(Debug, Deserialize)]
struct RawProviderSettings {
    provider: String,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    proxy: Option<String>,
}

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ConfigError;

    fn try_from(raw: RawConfigFile) -> ConfigResult<Self> {
        let mail_provider = match raw.mail_provider.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(validate_provider(value)?),
        };

        let providers = raw
            .providers
            .into_iter()
            .map(|p| {
                let settings = ProviderSettings {
                    provider: validate_provider(p.provider.trim())?,
                    base_url: p.base_url,
                    api_key: p.api_key,
                    domain: p.domain,
                    proxy: p.proxy,
                };
                Ok(settings.normalized())
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(Self { mail_provider, providers })
    }
}

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/tempmail/config.yaml)
    User,
    /// Workspace-level config (.config/tempmail/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// File-based configuration provider
///
/// Reads and writes configuration from YAML files. A missing file reads as
/// an empty config; a file naming an unregistered provider is an error.
///
/// # Example
///
/// ```no_run
/// use tempmail_core::config::FileConfigProvider;
///
/// let user_config = FileConfigProvider::user();
/// let workspace_config = FileConfigProvider::workspace("/path/to/workspace");
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<ConfigFile>>,
    logger: SharedLogger,
}

impl FileConfigProvider {
    /// Create a new file config provider for a specific path
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
            logger: std::sync::Arc::new(NoOpLogger),
        }
    }

    /// Create a user-level config provider (~/.config/tempmail/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        let path = config_dir.join("tempmail").join("config.yaml");
        Self::new(path, ConfigLevel::User)
    }

    /// Create a workspace-level config provider (.config/tempmail/config.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("tempmail").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    /// Route load/save messages to `logger`
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn parse_error(&self, message: impl std::fmt::Display) -> ConfigError {
        ConfigError::Parse {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Load config from file
    fn load(&self) -> ConfigResult<ConfigFile> {
        if !self.path.exists() {
            log_debug!(self.logger, "No {} config at {}", self.level.as_str(), self.path.display());
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        let raw: RawConfigFile = serde_yaml::from_str(&content)
            .map_err(|e| self.parse_error(e))?;

        ConfigFile::try_from(raw).inspect_err(|e| {
            log_error!(self.logger, "{}: {}", self.path.display(), e);
        })
    }

    /// Write config to file
    fn write_file(&self, config: &ConfigFile) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config)
            .map_err(|e| ConfigError::Other(format!("Failed to serialize YAML: {}", e)))?;

        fs::write(&self.path, content)?;
        log_debug!(self.logger, "Saved {} config to {}", self.level.as_str(), self.path.display());
        Ok(())
    }

    /// Apply `f` to the current config and persist it
    ///
    /// The cache write lock is held from load to write, so concurrent
    /// updates are applied one after another. If `f` or the write fails
    /// the cache keeps its previous value.
    fn update<F>(&self, f: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut ConfigFile) -> ConfigResult<()>,
    {
        let mut cache = self.cache.write().unwrap();
        let mut config = match cache.as_ref() {
            Some(config) => config.clone(),
            None => self.load()?,
        };

        f(&mut config)?;
        self.write_file(&config)?;
        *cache = Some(config);
        Ok(())
    }

    /// Get cached or load config
    fn get_config(&self) -> ConfigResult<ConfigFile> {
        if let Some(config) = self.cache.read().unwrap().as_ref() {
            return Ok(config.clone());
        }

        let mut cache = self.cache.write().unwrap();
        if let Some(config) = cache.as_ref() {
            return Ok(config.clone());
        }
        let config = self.load()?;
        *cache = Some(config.clone());
        Ok(config)
    }

    /// Reload config from disk (invalidate cache)
    pub fn reload(&self) -> ConfigResult<ConfigFile> {
        let mut cache = self.cache.write().unwrap();
        let config = self.load()?;
        *cache = Some(config.clone());
        Ok(config)
    }

    /// Create a backup of the current config file
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }

    /// Export config as JSON
    pub fn export_json(&self) -> ConfigResult<String> {
        let config = self.get_config()?;
        Ok(serde_json::to_string_pretty(&config)?)
    }

    /// Replace the config with a JSON document
    pub fn import_json(&self, json: &str) -> ConfigResult<()> {
        let raw: RawConfigFile = serde_json::from_str(json)?;
        let imported = ConfigFile::try_from(raw)?;
        self.update(|config| {
            *config = imported;
            Ok(())
        })
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    fn describe(&self) -> String {
        format!("{} config ({})", self.level.as_str(), self.path.display())
    }

    async fn get_mail_provider(&self) -> ConfigResult<Option<MailProvider>> {
        Ok(self.get_config()?.mail_provider)
    }

    async fn set_mail_provider(&self, provider: Option<MailProvider>) -> ConfigResult<()> {
        self.update(|config| {
            config.mail_provider = provider;
            Ok(())
        })
    }

    async fn get_provider_settings(&self) -> ConfigResult<Vec<ProviderSettings>> {
        Ok(self.get_config()?.providers)
    }

    async fn update_provider_settings(&self, settings: ProviderSettings) -> ConfigResult<()> {
        let settings = settings.normalized();

        self.update(|config| {
            match config.providers.iter().position(|s| s.provider == settings.provider) {
                Some(pos) => config.providers[pos] = settings,
                None => config.providers.push(settings),
            }
            Ok(())
        })
    }

    async fn remove_provider_settings(&self, provider: MailProvider) -> ConfigResult<()> {
        self.update(|config| {
            let original_len = config.providers.len();
            config.providers.retain(|s| s.provider != provider);

            if config.providers.len() == original_len {
                Err(ConfigError::SettingsNotFound(provider))
            } else {
                Ok(())
            }
        })
    }
}
