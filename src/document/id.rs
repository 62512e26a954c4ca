//! Stable document identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Path markers that identify an owning container.
const OWNER_MARKERS: [&str; 2] = ["Actor.", "Token."];

/// A stable, host-assigned document identifier.
///
/// Identifiers are dot-separated paths such as `Actor.X.Item.Y`. Beyond
/// the owning-container check the path is opaque: it is only ever handed
/// back to the host registry for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier points inside an Actor or Token container.
    ///
    /// Free-standing and scene-level documents are not owned; macros may
    /// only be created for owned items.
    pub fn is_owned(&self) -> bool {
        OWNER_MARKERS.iter().any(|marker| self.0.contains(marker))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for DocumentId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
