//! Macro records, drafts, and provenance flags.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host-assigned identity of a stored macro.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacroId(String);

impl MacroId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a macro does when invoked. This crate only generates script
/// macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroKind {
    Script,
}

/// A stored shortcut binding a command string to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroRecord {
    pub id: MacroId,
    pub name: String,
    pub kind: MacroKind,
    pub image: String,
    pub command: String,
    /// Open map of host flag values, keyed `<scope>.<flag>`.
    pub flags: Map<String, Value>,
}

impl MacroRecord {
    /// Whether this record carries the system provenance flag for the
    /// given scope.
    pub fn is_item_macro(&self, flag_scope: &str) -> bool {
        matches!(
            self.flags.get(&item_macro_flag(flag_scope)),
            Some(Value::Bool(true))
        )
    }
}

/// A record the collection has not minted an id for yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroDraft {
    pub name: String,
    pub kind: MacroKind,
    pub image: String,
    pub command: String,
    pub flags: Map<String, Value>,
}

impl MacroDraft {
    /// Draft for a system-generated item macro, tagged with the
    /// provenance flag under `flag_scope`.
    pub fn item_macro(
        name: impl Into<String>,
        image: impl Into<String>,
        command: impl Into<String>,
        flag_scope: &str,
    ) -> Self {
        let mut flags = Map::new();
        flags.insert(item_macro_flag(flag_scope), Value::Bool(true));
        Self {
            name: name.into(),
            kind: MacroKind::Script,
            image: image.into(),
            command: command.into(),
            flags,
        }
    }

    pub fn into_record(self, id: MacroId) -> MacroRecord {
        MacroRecord {
            id,
            name: self.name,
            kind: self.kind,
            image: self.image,
            command: self.command,
            flags: self.flags,
        }
    }
}

fn item_macro_flag(flag_scope: &str) -> String {
    format!("{flag_scope}.itemMacro")
}
