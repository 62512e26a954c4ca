//! Document identity, snapshots, and the host storage seam.
//!
//! Documents are owned by the host storage layer; this crate only reads
//! them through [`Snapshot`]s and patches them through [`Document::update`].

mod id;
mod snapshot;
mod store;

pub use id::DocumentId;
pub use snapshot::{Patch, Snapshot};
pub use store::{Document, DocumentRegistry, Item, StoreError, UpdateOptions};
