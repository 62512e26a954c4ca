//! Command strings binding a macro to an item identifier.
//!
//! The only structured datum a command carries is the item's uuid:
//! `<entry-point>("<uuid>")`.

use crate::document::DocumentId;

/// Render the invocation command for an item macro.
pub fn build_command(entry_point: &str, uuid: &DocumentId) -> String {
    format!("{entry_point}(\"{uuid}\")")
}

/// Recover the identifier embedded in an item macro command.
///
/// Tolerates surrounding whitespace and a trailing `;`. Returns `None`
/// for commands this system did not generate.
pub fn parse_command(entry_point: &str, command: &str) -> Option<DocumentId> {
    let body = command.trim().trim_end_matches(';').trim_end();
    let rest = body.strip_prefix(entry_point)?;
    let uuid = rest.strip_prefix("(\"")?.strip_suffix("\")")?;
    if uuid.is_empty() || uuid.contains('"') {
        return None;
    }
    Some(DocumentId::new(uuid))
}
