//! Configuration types.

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

/// Settings for the macro workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Entry point spliced into generated macro commands,
    /// `<entry_point>("<uuid>")`.
    #[serde(default = "default_entry_point")]
    pub entry_point: String,

    /// Scope prefix for flags written onto generated macros.
    #[serde(default = "default_flag_scope")]
    pub flag_scope: String,

    /// Display name used when a resolved item reports an empty name.
    #[serde(default = "default_fallback_macro_name")]
    pub fallback_macro_name: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            entry_point: default_entry_point(),
            flag_scope: default_flag_scope(),
            fallback_macro_name: default_fallback_macro_name(),
        }
    }
}

fn default_entry_point() -> String {
    "game.sheetbridge.rollItemMacro".to_string()
}

fn default_flag_scope() -> String {
    "sheetbridge".to_string()
}

fn default_fallback_macro_name() -> String {
    "Nameless Macro".to_string()
}
