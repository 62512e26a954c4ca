//! The binding bridge: keeps one live component synchronized with one
//! persisted document.
//!
//! A sheet calls [`bind`] once per render. The bridge derives an initial
//! [`crate::document::Snapshot`], hands the component a [`PropsEnvelope`],
//! and thereafter services the component's field mutations: persist with
//! the host re-render suppressed, swap a fresh snapshot into the same
//! envelope, notify the component. A failed persist does neither, so the
//! visible data never drifts from what is stored.

mod bind;
mod envelope;
mod mount;
mod subscriber;

pub use bind::{bind, BridgeError, ComponentHandle, SheetAccessor, UpdateHandle};
pub use envelope::PropsEnvelope;
pub use mount::{MountKind, MountRegion, MountTarget};
pub use subscriber::{Component, ComponentFactory, Subscriber};
