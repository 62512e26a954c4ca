//! Binding construction and the update callback.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::bridge::envelope::PropsEnvelope;
use crate::bridge::mount::MountRegion;
use crate::bridge::subscriber::{Component, ComponentFactory, Subscriber};
use crate::document::{Document, Patch, Snapshot, StoreError, UpdateOptions};

/// Errors raised while establishing or driving a binding.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The sheet container held no form to mount into.
    #[error("no form mount target in the sheet container")]
    MountTargetMissing,

    /// The host storage layer rejected a persist.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read access to a sheet's document and presentation data.
pub trait SheetAccessor: Send + Sync {
    /// Derive a fresh snapshot of the document's presentation data.
    fn get_data(&self) -> Snapshot;

    /// The document backing this sheet.
    fn document(&self) -> Arc<dyn Document>;
}

/// State shared between the envelope's update handle and the retained
/// component. Lives exactly as long as the [`ComponentHandle`].
struct BridgeCore {
    accessor: Arc<dyn SheetAccessor>,
    envelope: PropsEnvelope,
    /// Filled in after construction: the component is built from the
    /// envelope, and the envelope already carries the update handle.
    subscriber: RwLock<Option<Arc<dyn Subscriber>>>,
}

/// The update callback carried inside the envelope.
///
/// Holds only a weak reference to the binding, so a callback invoked
/// after the sheet was torn down is a no-op, and a persist already in
/// flight at teardown completes against a discarded envelope without
/// effect.
#[derive(Clone)]
pub struct UpdateHandle {
    core: Weak<BridgeCore>,
}

impl UpdateHandle {
    /// Apply `{field_path: value}` to the bound document.
    ///
    /// Persists with the host re-render suppressed. On success the
    /// envelope's `data` is replaced with a fresh snapshot and the
    /// component is notified, in that order. On failure neither happens
    /// and the storage error is returned: the component keeps showing the
    /// pre-edit state and the caller surfaces the error.
    pub async fn update(&self, field_path: &str, value: Value) -> Result<(), StoreError> {
        let Some(core) = self.core.upgrade() else {
            debug!(field = field_path, "update after teardown, ignoring");
            return Ok(());
        };
        let document = core.accessor.document();
        document
            .update(Patch::set(field_path, value), UpdateOptions::NO_RENDER)
            .await?;

        let snapshot = core.accessor.get_data();
        core.envelope.replace_data(snapshot.clone());
        let subscriber = core.subscriber.read().clone();
        if let Some(subscriber) = subscriber {
            subscriber.notify(&snapshot);
        }
        debug!(uuid = %document.uuid(), field = field_path, "field persisted and component refreshed");
        Ok(())
    }
}

/// Retains a live binding: the component plus the bridge state behind its
/// envelope. Dropping the handle is sheet teardown; the document itself
/// is untouched.
pub struct ComponentHandle {
    core: Arc<BridgeCore>,
    component: Arc<dyn Component>,
}

impl std::fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentHandle").finish_non_exhaustive()
    }
}

impl ComponentHandle {
    /// The live component instance.
    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }

    /// The envelope shared with the component.
    pub fn envelope(&self) -> &PropsEnvelope {
        &self.core.envelope
    }
}

/// Attach a component to a document for the lifetime of one sheet render.
///
/// Derives the initial snapshot, builds the props envelope, constructs
/// the component exactly once with the envelope as its sole argument, and
/// mounts it at the first form target in `region`. A formless region is a
/// configuration error.
pub fn bind<F>(
    accessor: Arc<dyn SheetAccessor>,
    factory: &F,
    region: &MountRegion,
) -> Result<ComponentHandle, BridgeError>
where
    F: ComponentFactory,
{
    let mount = region.first_form().ok_or(BridgeError::MountTargetMissing)?;
    let snapshot = accessor.get_data();
    let core = Arc::new_cyclic(|weak: &Weak<BridgeCore>| BridgeCore {
        accessor,
        envelope: PropsEnvelope::new(snapshot, UpdateHandle { core: weak.clone() }),
        subscriber: RwLock::new(None),
    });

    let component = factory.create(core.envelope.clone());
    let subscriber: Arc<dyn Subscriber> = component.clone();
    *core.subscriber.write() = Some(subscriber);

    debug!(
        mount = mount.label(),
        uuid = %core.accessor.document().uuid(),
        "component bound to document"
    );
    Ok(ComponentHandle { core, component })
}
