//! Crate configuration: the strings spliced into generated macros.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, WorkflowConfig};
