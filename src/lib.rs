//! Presentation-layer core for a tabletop system embedded in a
//! virtual-tabletop host.
//!
//! Two cooperating subsystems:
//!
//! - [`bridge`] keeps a live UI component synchronized with a persisted
//!   document: one snapshot in, field mutations out, fresh snapshots back
//!   without remounting the component.
//! - [`hotbar`] turns an item drop into a hotbar macro without creating
//!   duplicates, and re-validates item ownership every time that macro is
//!   invoked.
//!
//! Everything host-owned (documents, the macro collection, the user's
//! hotbar, notification UI) is reached through injected capability traits,
//! so both subsystems run deterministically under test without a live
//! host.

pub mod bridge;
pub mod config;
pub mod document;
pub mod hotbar;
pub mod logging;

pub use bridge::{bind, BridgeError, ComponentHandle, PropsEnvelope, SheetAccessor};
pub use document::{DocumentId, Snapshot};
pub use hotbar::{create_or_reuse_macro, execute_macro, resolve_item, Environment};
