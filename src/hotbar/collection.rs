//! Host collaborator seams: the macro collection, the user's hotbar, and
//! notifications.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::document::StoreError;
use crate::hotbar::record::{MacroDraft, MacroRecord};

/// A user-scoped, integer-addressed shortcut position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HotbarSlot(u32);

impl HotbarSlot {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HotbarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The current user's macro collection.
#[async_trait]
pub trait MacroCollection: Send + Sync {
    /// Find an existing macro by display name and exact command string.
    async fn find_item_macro(&self, name: &str, command: &str) -> Option<MacroRecord>;

    /// Store a new macro, minting its id.
    async fn create(&self, draft: MacroDraft) -> Result<MacroRecord, StoreError>;
}

/// Hotbar assignment for the current user.
#[async_trait]
pub trait HotbarUser: Send + Sync {
    /// Assign a macro to a slot. Re-assigning the same macro to the same
    /// slot is a no-op from the data perspective.
    async fn assign_macro(&self, record: &MacroRecord, slot: HotbarSlot)
        -> Result<(), StoreError>;
}

/// User-visible, non-fatal notifications.
pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str);
}
