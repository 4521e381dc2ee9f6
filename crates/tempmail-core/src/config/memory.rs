//! In-memory configuration provider

use std::sync::RwLock;

use async_trait::async_trait;

use crate::providers::{MailProvider, ProviderSettings};
use super::traits::{ConfigProvider, ConfigError, ConfigResult};

#[derive(Debug, Default)]
struct MemoryState {
    mail_provider: Option<MailProvider>,
    settings: Vec<ProviderSettings>,
}

/// In-memory configuration provider
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    state: RwLock<MemoryState>,
}

impl MemoryConfigProvider {
    /// Create a new empty memory config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory config provider with a selection already made
    pub fn with_mail_provider(provider: MailProvider) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                mail_provider: Some(provider),
                settings: Vec::new(),
            }),
        }
    }

    /// Clear the selection and all settings
    pub fn clear(&self) {
        let mut guard = self.state.write().unwrap();
        *guard = MemoryState::default();
    }
}

#[async_trait]
impl ConfigProvider for MemoryConfigProvider {
    fn describe(&self) -> String {
        "in-memory config".to_string()
    }

    async fn get_mail_provider(&self) -> ConfigResult<Option<MailProvider>> {
        Ok(self.state.read().unwrap().mail_provider)
    }

    async fn set_mail_provider(&self, provider: Option<MailProvider>) -> ConfigResult<()> {
        self.state.write().unwrap().mail_provider = provider;
        Ok(())
    }

    async fn get_provider_settings(&self) -> ConfigResult<Vec<ProviderSettings>> {
        Ok(self.state.read().unwrap().settings.clone())
    }

    async fn update_provider_settings(&self, settings: ProviderSettings) -> ConfigResult<()> {
        let mut guard = self.state.write().unwrap();
        let settings = settings.normalized();

        match guard.settings.iter().position(|s| s.provider == settings.provider) {
            Some(pos) => guard.settings[pos] = settings,
            None => guard.settings.push(settings),
        }
        Ok(())
    }

    async fn remove_provider_settings(&self, provider: MailProvider) -> ConfigResult<()> {
        let mut guard = self.state.write().unwrap();

        let original_len = guard.settings.len();
        guard.settings.retain(|s| s.provider != provider);

        if guard.settings.len() == original_len {
            Err(ConfigError::SettingsNotFound(provider))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_config_provider() {
        let config = MemoryConfigProvider::new();

        // Initially nothing selected
        assert!(config.get_mail_provider().await.unwrap().is_none());
        assert!(config.get_provider_settings().await.unwrap().is_empty());

        config.set_mail_provider(Some(MailProvider::Moemail)).await.unwrap();
        assert_eq!(config.get_mail_provider().await.unwrap(), Some(MailProvider::Moemail));

        // Upsert keyed by provider
        config
            .update_provider_settings(ProviderSettings::new(MailProvider::Moemail).with_api_key("a"))
            .await
            .unwrap();
        config
            .update_provider_settings(ProviderSettings::new(MailProvider::Moemail).with_api_key("b"))
            .await
            .unwrap();

        let settings = config.get_provider_settings().await.unwrap();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].api_key.as_deref(), Some("b"));

        config.remove_provider_settings(MailProvider::Moemail).await.unwrap();
        assert!(matches!(
            config.remove_provider_settings(MailProvider::Moemail).await,
            Err(ConfigError::SettingsNotFound(MailProvider::Moemail))
        ));

        config.clear();
        assert!(config.get_mail_provider().await.unwrap().is_none());
    }
}
