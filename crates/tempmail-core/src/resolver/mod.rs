//! Provider resolution across configuration sources
//!
//! - `ProviderResolver`: Picks the active mail provider and its settings

mod provider_resolver;

pub use provider_resolver::{
    ProviderResolver, ResolvedProvider, SelectionSource, DEFAULT_ENV_VAR,
};
