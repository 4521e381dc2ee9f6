//! Per-provider connection settings

use serde::{Deserialize, Serialize};

use super::registry::MailProvider;

/// Connection settings a host stores for one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Which provider these settings belong to
    pub provider: MailProvider,
    /// Custom service URL (uses the provider default if not set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// API key sent with requests, if the service needs one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Preferred mailbox domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// HTTP(S) proxy URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

impl ProviderSettings {
    /// Create empty settings for a provider
    pub fn new(provider: MailProvider) -> Self {
        Self {
            provider,
            base_url: None,
            api_key: None,
            domain: None,
            proxy: None,
        }
    }

    /// Set the service URL (trailing slashes are dropped)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = clean_base_url(url.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = clean(key.into());
        self
    }

    /// Set the mailbox domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = clean(domain.into());
        self
    }

    /// Set the proxy URL
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = clean(proxy.into());
        self
    }

    /// Apply the same cleanup the builders do to values read from a file
    pub fn normalized(self) -> Self {
        Self {
            provider: self.provider,
            base_url: self.base_url.and_then(clean_base_url),
            api_key: self.api_key.and_then(clean),
            domain: self.domain.and_then(clean),
            proxy: self.proxy.and_then(clean),
        }
    }

    /// Configured service URL, or the provider's public one
    pub fn effective_base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .or_else(|| self.provider.default_base_url())
    }

    /// Overlay `other` on top of `self`; set fields in `other` win
    pub fn merge(self, other: ProviderSettings) -> Self {
        Self {
            provider: self.provider,
            base_url: other.base_url.or(self.base_url),
            api_key: other.api_key.or(self.api_key),
            domain: other.domain.or(self.domain),
            proxy: other.proxy.or(self.proxy),
        }
    }
}

fn clean(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn clean_base_url(value: String) -> Option<String> {
    clean(value).and_then(|url| clean(url.trim_end_matches('/').to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_cleans_values() {
        let settings = ProviderSettings::new(MailProvider::Moemail)
            .with_base_url("https://mail.example.com/")
            .with_api_key("  key-123 ")
            .with_domain("   ");

        assert_eq!(settings.base_url.as_deref(), Some("https://mail.example.com"));
        assert_eq!(settings.api_key.as_deref(), Some("key-123"));
        assert!(settings.domain.is_none());
    }

    #[test]
    fn test_effective_base_url() {
        let moemail = ProviderSettings::new(MailProvider::Moemail);
        assert_eq!(moemail.effective_base_url(), Some("https://moemail.app"));

        let custom = moemail.with_base_url("https://self.hosted");
        assert_eq!(custom.effective_base_url(), Some("https://self.hosted"));

        let duck = ProviderSettings::new(MailProvider::DuckMail);
        assert!(duck.effective_base_url().is_none());
    }

    #[test]
    fn test_merge_prefers_other() {
        let user = ProviderSettings::new(MailProvider::Moemail)
            .with_api_key("user-key")
            .with_domain("user.example");
        let workspace = ProviderSettings::new(MailProvider::Moemail)
            .with_domain("ws.example");

        let merged = user.merge(workspace);
        assert_eq!(merged.api_key.as_deref(), Some("user-key"));
        assert_eq!(merged.domain.as_deref(), Some("ws.example"));
    }

    #[test]
    fn test_yaml_round_trip_skips_unset() {
        let settings = ProviderSettings::new(MailProvider::Freemail).with_domain("free.example");
        let yaml = serde_yaml::to_string(&settings).unwrap();
        assert!(yaml.contains("provider: freemail"));
        assert!(!yaml.contains("api_key"));

        let back: ProviderSettings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let result = serde_yaml::from_str::<ProviderSettings>("provider: yahoo\n");
        assert!(result.is_err());
    }
}
