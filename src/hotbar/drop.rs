//! Drop payloads from the host's drag-and-drop layer.

use serde::{Deserialize, Serialize};

use crate::document::DocumentId;

/// A dropped entity, discriminated by the host's `type` tag.
///
/// Non-item drops are preserved rather than rejected at parse time: the
/// workflow ignores them so other handlers can claim the drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DropPayload {
    Item { uuid: DocumentId },
    #[serde(other)]
    Other,
}
