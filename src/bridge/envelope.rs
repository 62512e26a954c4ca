//! The shared props carrier handed to a component at construction.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::bridge::bind::UpdateHandle;
use crate::document::Snapshot;

/// The mutable carrier a component receives as its sole constructor
/// argument.
///
/// Clones are handles onto one shared allocation: the component keeps one
/// for its whole life and observes new snapshots through it, while the
/// bridge swaps the `data` field in place after each successful persist.
/// The carrier itself is never replaced, which is what lets the component
/// keep transient local state (focus, scroll) across refreshes.
///
/// Only the bridge writes `data`; components read it and request writes
/// indirectly through [`PropsEnvelope::update`].
#[derive(Clone)]
pub struct PropsEnvelope {
    inner: Arc<EnvelopeInner>,
}

struct EnvelopeInner {
    data: RwLock<Snapshot>,
    update: UpdateHandle,
}

impl PropsEnvelope {
    pub(crate) fn new(data: Snapshot, update: UpdateHandle) -> Self {
        Self {
            inner: Arc::new(EnvelopeInner {
                data: RwLock::new(data),
                update,
            }),
        }
    }

    /// The current snapshot.
    pub fn data(&self) -> Snapshot {
        self.inner.data.read().clone()
    }

    /// The update callback: persists a field mutation and refreshes
    /// `data` on success.
    pub fn update(&self) -> &UpdateHandle {
        &self.inner.update
    }

    /// Swap in a fresh snapshot. Bridge-only.
    pub(crate) fn replace_data(&self, snapshot: Snapshot) {
        *self.inner.data.write() = snapshot;
    }

    /// Whether two handles view the same underlying envelope.
    pub fn same_envelope(&self, other: &PropsEnvelope) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
