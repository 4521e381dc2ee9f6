//! Logging abstractions for runtime-agnostic logging
//!
//! The host decides where messages go: a console, an IDE output channel,
//! or nowhere at all.

mod traits;
mod noop;
mod console;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
