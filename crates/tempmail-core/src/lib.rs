//! TempMail Core
//!
//! Registry of supported temporary-email providers and the configuration
//! plumbing a host uses to pick one. Runtime agnostic: nothing here talks
//! to a mail service.
//!
//! ## Provider selection
//!
//! ```rust,ignore
//! use tempmail_core::{list_providers, ProviderResolver};
//!
//! // Populate a dropdown
//! for entry in list_providers() {
//!     add_option(entry.label, entry.value);
//! }
//!
//! // Pick the active provider: override > $TEMPMAIL_PROVIDER > workspace > user > default
//! let resolved = ProviderResolver::new()
//!     .with_workspace_path(workspace_root)
//!     .resolve()
//!     .await?;
//! ```

pub mod providers;
pub mod logging;
pub mod config;
pub mod resolver;

// Re-export commonly used types
pub use providers::{
    MailProvider, ProviderEntry, ProviderSettings, ProviderError, ProviderResult,
    PROVIDERS, DEFAULT_PROVIDER,
    list_providers, default_provider, is_known_provider, validate_provider,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};

pub use config::{
    ConfigProvider, ConfigError, ConfigResult,
    MemoryConfigProvider, FileConfigProvider, ConfigFile, ConfigLevel,
};

pub use resolver::{ProviderResolver, ResolvedProvider, SelectionSource};
