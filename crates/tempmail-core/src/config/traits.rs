//! Configuration provider trait

use async_trait::async_trait;

use crate::providers::{MailProvider, ProviderError, ProviderSettings};

/// Configuration provider abstraction
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory for testing
/// - `FileConfigProvider`: Reads from YAML file (~/.config/tempmail/config.yaml)
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Short description of where this configuration lives
    fn describe(&self) -> String;

    /// Get the selected provider, if this source sets one
    async fn get_mail_provider(&self) -> ConfigResult<Option<MailProvider>>;

    /// Set or clear the selected provider
    async fn set_mail_provider(&self, provider: Option<MailProvider>) -> ConfigResult<()>;

    /// Get all stored per-provider settings
    async fn get_provider_settings(&self) -> ConfigResult<Vec<ProviderSettings>>;

    /// Insert or replace the settings for `settings.provider`
    async fn update_provider_settings(&self, settings: ProviderSettings) -> ConfigResult<()>;

    /// Remove stored settings for a provider
    async fn remove_provider_settings(&self, provider: MailProvider) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidProvider(#[from] ProviderError),

    #[error("No settings stored for provider: {0}")]
    SettingsNotFound(MailProvider),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
