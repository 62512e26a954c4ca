//! The host storage seam: documents, items, and the registry.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::document::id::DocumentId;
use crate::document::snapshot::Patch;

/// Errors surfaced by the host storage layer.
///
/// The core never retries; a failed persist propagates to whoever asked
/// for the write, and retry policy stays with the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A partial update could not be persisted.
    #[error("failed to persist update to '{uuid}': {message}")]
    PersistenceFailure { uuid: DocumentId, message: String },

    /// Any other host-side storage fault.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Options accompanying a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Whether the host should re-render dependent sheets itself. The
    /// binding bridge always passes `false` and drives the refresh through
    /// its own subscriber, so one edit never paints twice.
    pub render: bool,
}

impl UpdateOptions {
    pub const NO_RENDER: UpdateOptions = UpdateOptions { render: false };
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self { render: true }
    }
}

/// A persistent, host-owned record with partial-update capability.
#[async_trait]
pub trait Document: Send + Sync {
    /// Stable identifier of this document.
    fn uuid(&self) -> DocumentId;

    /// Apply a partial update to the persisted record.
    async fn update(&self, patch: Patch, options: UpdateOptions) -> Result<(), StoreError>;
}

/// An item document: a display surface plus an invocable effect.
#[async_trait]
pub trait Item: Document {
    /// Display name shown on sheets and on generated macros.
    fn name(&self) -> String;

    /// Icon path reused as the macro image.
    fn image(&self) -> String;

    /// Identifier of the owning Actor or Token, `None` when the item is
    /// free-standing.
    fn parent(&self) -> Option<DocumentId>;

    /// Trigger the item's effect. Opaque to this crate; the macro
    /// workflow awaits this one call and nothing further.
    async fn roll(&self);
}

/// Lookup into the host's document registry.
#[async_trait]
pub trait DocumentRegistry: Send + Sync {
    /// Resolve an identifier to a live item.
    ///
    /// `None` means no document exists at that identifier — it may have
    /// been deleted since the identifier was captured. Not an error.
    async fn get_item(&self, uuid: &DocumentId) -> Option<Arc<dyn Item>>;
}
