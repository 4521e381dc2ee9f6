//! Provider error types

use thiserror::Error;

use super::registry::PROVIDERS;

/// Errors raised when checking a provider identifier against the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The identifier is not one of the registered values
    #[error("Unrecognized mail provider '{value}' (expected one of: {expected})")]
    Unrecognized { value: String, expected: String },
}

impl ProviderError {
    /// Create an unrecognized-provider error for `value`
    pub fn unrecognized(value: impl Into<String>) -> Self {
        let expected = PROVIDERS
            .iter()
            .map(|e| e.value)
            .collect::<Vec<_>>()
            .join(", ");
        Self::Unrecognized {
            value: value.into(),
            expected,
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
