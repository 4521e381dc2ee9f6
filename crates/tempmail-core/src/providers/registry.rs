//! Static registry of supported temporary-email providers

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::{ProviderError, ProviderResult};

/// A temporary-email provider known to this crate
///
/// Any field typed `MailProvider` can only hold a registered identifier,
/// so unknown providers are rejected at parse time rather than on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum MailProvider {
    #[default]
    DuckMail,
    Moemail,
    Freemail,
}

/// A registry entry: display label plus machine identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderEntry {
    /// Human-readable display name (e.g. "DuckMail")
    pub label: &'static str,
    /// Stable machine identifier (e.g. "duckmail")
    pub value: &'static str,
}

/// All providers, in display order
pub static PROVIDERS: [ProviderEntry; 3] = [
    ProviderEntry { label: "DuckMail", value: "duckmail" },
    ProviderEntry { label: "Moemail", value: "moemail" },
    ProviderEntry { label: "Freemail", value: "freemail" },
];

/// Provider used when nothing else is selected
pub const DEFAULT_PROVIDER: MailProvider = MailProvider::DuckMail;

static BY_VALUE: Lazy<HashMap<&'static str, MailProvider>> = Lazy::new(|| {
    MailProvider::ALL
        .iter()
        .map(|provider| (provider.value(), *provider))
        .collect()
});

impl MailProvider {
    /// Every provider, in the same order as [`PROVIDERS`]
    pub const ALL: [MailProvider; 3] = [
        MailProvider::DuckMail,
        MailProvider::Moemail,
        MailProvider::Freemail,
    ];

    /// Registry entry for this provider
    pub fn entry(&self) -> &'static ProviderEntry {
        match self {
            MailProvider::DuckMail => &PROVIDERS[0],
            MailProvider::Moemail => &PROVIDERS[1],
            MailProvider::Freemail => &PROVIDERS[2],
        }
    }

    /// Machine identifier (e.g. "moemail")
    pub fn value(&self) -> &'static str {
        self.entry().value
    }

    /// Display label (e.g. "Moemail")
    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    /// Public service URL, where one is known
    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            MailProvider::Moemail => Some("https://moemail.app"),
            MailProvider::DuckMail | MailProvider::Freemail => None,
        }
    }
}

impl fmt::Display for MailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for MailProvider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_provider(s)
    }
}

impl TryFrom<String> for MailProvider {
    type Error = ProviderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_provider(&value)
    }
}

impl From<MailProvider> for &'static str {
    fn from(provider: MailProvider) -> Self {
        provider.value()
    }
}

/// List all providers in display order
pub fn list_providers() -> &'static [ProviderEntry] {
    &PROVIDERS
}

/// Get the default provider identifier
pub fn default_provider() -> MailProvider {
    DEFAULT_PROVIDER
}

/// Check whether `value` is a registered provider identifier
pub fn is_known_provider(value: &str) -> bool {
    BY_VALUE.contains_key(value)
}

/// Validate a provider identifier
///
/// Matching is exact: `"Moemail"` and `" moemail"` are not registered values.
///
/// # Example
///
/// ```
/// use tempmail_core::providers::{validate_provider, MailProvider};
///
/// assert_eq!(validate_provider("moemail").unwrap(), MailProvider::Moemail);
/// assert!(validate_provider("yahoo").is_err());
/// ```
pub fn validate_provider(value: &str) -> ProviderResult<MailProvider> {
    BY_VALUE
        .get(value)
        .copied()
        .ok_or_else(|| ProviderError::unrecognized(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_three_entries() {
        assert_eq!(list_providers().len(), 3);
    }

    #[test]
    fn test_registry_order() {
        let pairs: Vec<_> = list_providers()
            .iter()
            .map(|e| (e.label, e.value))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("DuckMail", "duckmail"),
                ("Moemail", "moemail"),
                ("Freemail", "freemail"),
            ]
        );
    }

    #[test]
    fn test_values_are_unique() {
        let values: HashSet<_> = list_providers().iter().map(|e| e.value).collect();
        assert_eq!(values.len(), 3);
        assert_eq!(values, HashSet::from(["duckmail", "moemail", "freemail"]));
    }

    #[test]
    fn test_default_provider() {
        assert_eq!(default_provider().value(), "duckmail");
        assert_eq!(MailProvider::default(), DEFAULT_PROVIDER);

        // The default must point at exactly one registry entry
        let matches = list_providers()
            .iter()
            .filter(|e| e.value == DEFAULT_PROVIDER.value())
            .count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_labels_differ_from_values() {
        for entry in list_providers() {
            assert!(!entry.label.is_empty());
            assert_ne!(entry.label, entry.value);
        }
    }

    #[test]
    fn test_enum_matches_registry() {
        for (provider, entry) in MailProvider::ALL.iter().zip(list_providers()) {
            assert_eq!(provider.entry(), entry);
            assert_eq!(provider.to_string(), entry.value);
        }
    }

    #[test]
    fn test_validate_provider() {
        assert_eq!(validate_provider("moemail").unwrap(), MailProvider::Moemail);

        let err = validate_provider("yahoo").unwrap_err();
        assert!(matches!(err, ProviderError::Unrecognized { ref value, .. } if value == "yahoo"));
        assert!(err.to_string().contains("yahoo"));
        assert!(err.to_string().contains("duckmail, moemail, freemail"));
    }

    #[test]
    fn test_validation_is_exact() {
        assert!(validate_provider("Moemail").is_err());
        assert!(validate_provider(" moemail").is_err());
        assert!(validate_provider("").is_err());
        assert!(!is_known_provider("DuckMail"));
        assert!(is_known_provider("freemail"));
    }

    #[test]
    fn test_from_str() {
        let provider: MailProvider = "freemail".parse().unwrap();
        assert_eq!(provider, MailProvider::Freemail);
        assert!("gmail".parse::<MailProvider>().is_err());
    }

    #[test]
    fn test_serde_uses_value() {
        let json = serde_json::to_string(&MailProvider::Moemail).unwrap();
        assert_eq!(json, "\"moemail\"");

        let parsed: MailProvider = serde_json::from_str("\"duckmail\"").unwrap();
        assert_eq!(parsed, MailProvider::DuckMail);

        assert!(serde_json::from_str::<MailProvider>("\"yahoo\"").is_err());
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(MailProvider::Moemail.default_base_url(), Some("https://moemail.app"));
        assert!(MailProvider::DuckMail.default_base_url().is_none());
    }
}
