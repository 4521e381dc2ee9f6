//! Configuration provider abstractions
//!
//! Where a host persists its mail provider selection:
//! - `MemoryConfigProvider`: In-memory for testing and embedding
//! - `FileConfigProvider`: YAML file-based (user/workspace level)

mod traits;
mod memory;
mod file;

pub use traits::{ConfigProvider, ConfigError, ConfigResult};
pub use memory::MemoryConfigProvider;
pub use file::{FileConfigProvider, ConfigFile, ConfigLevel};
