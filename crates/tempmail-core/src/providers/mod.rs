//! Temporary-email provider registry
//!
//! The registry is a process-wide constant: three providers, each with a
//! display label and a stable identifier, plus a default selection.
//!
//! ```rust
//! use tempmail_core::providers::{list_providers, default_provider, MailProvider};
//!
//! for entry in list_providers() {
//!     println!("{} ({})", entry.label, entry.value);
//! }
//! assert_eq!(default_provider(), MailProvider::DuckMail);
//! ```

mod error;
mod registry;
mod settings;

pub use error::{ProviderError, ProviderResult};
pub use registry::{
    MailProvider, ProviderEntry, PROVIDERS, DEFAULT_PROVIDER,
    list_providers, default_provider, is_known_provider, validate_provider,
};
pub use settings::ProviderSettings;
