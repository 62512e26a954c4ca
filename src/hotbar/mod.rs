//! The macro workflow: idempotent hotbar macro creation from item drops,
//! and execution that re-validates ownership every time.
//!
//! Stateless between invocations — everything the workflow needs is
//! reconstructed from the identifier embedded in the macro's command
//! string, so a macro can never act on a cached view of an item that has
//! since been deleted or unequipped.

mod collection;
mod command;
mod drop;
mod record;
mod workflow;

pub use collection::{HotbarSlot, HotbarUser, MacroCollection, Notifier};
pub use command::{build_command, parse_command};
pub use drop::DropPayload;
pub use record::{MacroDraft, MacroId, MacroKind, MacroRecord};
pub use workflow::{
    create_or_reuse_macro, execute_macro, resolve_item, DropDisposition, Environment,
    WorkflowError,
};
