//! The workflow operations: resolve, create-or-reuse, execute.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::WorkflowConfig;
use crate::document::{DocumentId, DocumentRegistry, Item, StoreError};
use crate::hotbar::collection::{HotbarSlot, HotbarUser, MacroCollection, Notifier};
use crate::hotbar::command::build_command;
use crate::hotbar::drop::DropPayload;
use crate::hotbar::record::MacroDraft;

/// Everything the workflow needs from the host, injected explicitly so
/// the operations run deterministically under test.
#[derive(Clone)]
pub struct Environment {
    pub documents: Arc<dyn DocumentRegistry>,
    pub macros: Arc<dyn MacroCollection>,
    pub users: Arc<dyn HotbarUser>,
    pub notify: Arc<dyn Notifier>,
    pub config: WorkflowConfig,
}

/// Whether a drop was consumed by this handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropDisposition {
    /// The drop was fully handled; the host must suppress its default
    /// drop handling.
    Handled,
    /// Not an item drop; other handlers may claim it.
    Ignored,
}

/// Failures of the macro workflow. All are non-fatal to the host, and the
/// user-visible warning has already been surfaced when one is returned.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The dropped identifier does not point at an owned item.
    #[error("macro buttons can only be created for owned items, got '{uuid}'")]
    InvalidDrop { uuid: DocumentId },

    /// No document exists at the identifier.
    #[error("no item found at '{uuid}'")]
    NotFound { uuid: DocumentId },

    /// The host storage layer failed while creating or assigning.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolve an identifier to a live item through the host registry.
///
/// `None` is "not found", not an error: the identifier may point at a
/// document deleted since it was captured.
pub async fn resolve_item(env: &Environment, uuid: &DocumentId) -> Option<Arc<dyn Item>> {
    env.documents.get_item(uuid).await
}

/// Create a hotbar macro from an item drop, reusing any existing record.
///
/// Repeated drops of one item never create a second record for the same
/// name and command pair; only the hotbar assignment changes. The lookup
/// and the create are not one critical section: drop events arrive
/// serialized on the host's UI loop, and two truly concurrent drops of
/// the same item could each mint a record. Accepted, not locked against.
pub async fn create_or_reuse_macro(
    env: &Environment,
    payload: &DropPayload,
    slot: HotbarSlot,
) -> Result<DropDisposition, WorkflowError> {
    let DropPayload::Item { uuid } = payload else {
        debug!("non-item drop, leaving for other handlers");
        return Ok(DropDisposition::Ignored);
    };
    if !uuid.is_owned() {
        env.notify
            .warn("You can only create macro buttons for owned Items");
        return Err(WorkflowError::InvalidDrop { uuid: uuid.clone() });
    }
    let Some(item) = resolve_item(env, uuid).await else {
        env.notify.warn(&format!("Could not find item {uuid}"));
        return Err(WorkflowError::NotFound { uuid: uuid.clone() });
    };

    let command = build_command(&env.config.entry_point, uuid);
    let name = display_name(item.as_ref(), &env.config);
    let record = match env.macros.find_item_macro(&name, &command).await {
        Some(existing) => {
            debug!(id = %existing.id, name = %existing.name, "reusing existing item macro");
            existing
        }
        None => {
            let draft = MacroDraft::item_macro(&name, item.image(), &command, &env.config.flag_scope);
            env.macros.create(draft).await?
        }
    };
    env.users.assign_macro(&record, slot).await?;
    debug!(name = %record.name, slot = %slot, "item macro assigned to hotbar");
    Ok(DropDisposition::Handled)
}

/// Execute an item macro created by [`create_or_reuse_macro`].
///
/// The item is re-resolved on every invocation: ownership and existence
/// can change between macro creation and use, and a macro must never act
/// on a deleted or unequipped item. Stale macros warn and do nothing;
/// cleaning them up is left to the user.
pub async fn execute_macro(env: &Environment, uuid: &DocumentId) {
    match resolve_item(env, uuid).await {
        Some(item) if item.parent().is_some() => {
            debug!(item = %uuid, "rolling item macro");
            item.roll().await;
        }
        Some(item) => {
            warn!(item = %uuid, "item macro target is no longer owned");
            // Fall back to the identifier, not the configured name: the
            // warning has to point the user at the macro to recreate.
            let name = item.name();
            let label = if name.is_empty() { uuid.to_string() } else { name };
            env.notify.warn(&format!(
                "Could not find item {label}. You may need to delete and recreate this macro."
            ));
        }
        None => {
            warn!(item = %uuid, "item macro target no longer exists");
            env.notify.warn(&format!(
                "Could not find item {uuid}. You may need to delete and recreate this macro."
            ));
        }
    }
}

fn display_name(item: &dyn Item, config: &WorkflowConfig) -> String {
    let name = item.name();
    if name.is_empty() {
        config.fallback_macro_name.clone()
    } else {
        name
    }
}
