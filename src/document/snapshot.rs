//! Immutable presentation snapshots and partial updates.

use serde_json::{Map, Value};

/// A point-in-time view of a document's data.
///
/// Snapshots carry no identity beyond value equality. The bridge derives a
/// fresh one after every successful mutation and discards the previous
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot(Value);

impl Snapshot {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Dotted field-path lookup, e.g. `"attributes.hp.value"`.
    pub fn get(&self, field_path: &str) -> Option<&Value> {
        field_path
            .split('.')
            .try_fold(&self.0, |node, segment| node.get(segment))
    }
}

/// An ordered set of field-path assignments applied to a document.
///
/// The bridge only ever sends single-entry patches; hosts may batch more.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    entries: Vec<(String, Value)>,
}

impl Patch {
    /// A single-entry patch: `{field_path: value}`.
    pub fn set(field_path: impl Into<String>, value: Value) -> Self {
        Self {
            entries: vec![(field_path.into(), value)],
        }
    }

    /// Append another assignment; later entries win on equal paths.
    pub fn with(mut self, field_path: impl Into<String>, value: Value) -> Self {
        self.entries.push((field_path.into(), value));
        self
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every assignment to a JSON tree, creating intermediate
    /// objects as needed. Non-object nodes along a path are replaced.
    pub fn apply_to(&self, target: &mut Value) {
        for (field_path, value) in &self.entries {
            set_path(target, field_path, value.clone());
        }
    }
}

fn set_path(target: &mut Value, field_path: &str, value: Value) {
    match field_path.split_once('.') {
        None => match target {
            Value::Object(map) => {
                map.insert(field_path.to_string(), value);
            }
            other => {
                let mut map = Map::new();
                map.insert(field_path.to_string(), value);
                *other = Value::Object(map);
            }
        },
        Some((head, rest)) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(map) = target {
                let child = map.entry(head.to_string()).or_insert(Value::Null);
                set_path(child, rest, value);
            }
        }
    }
}
