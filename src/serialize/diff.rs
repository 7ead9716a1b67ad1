//! Structured diff of JSON values.
//!
//! Produces a tree-shaped description of the difference between two state
//! representations, suitable for display in a diff view. The shape mirrors
//! the input structure:
//!
//! - objects and arrays recurse per key/index, keeping only differing entries;
//! - an entry present only on the new side becomes `{"added": value}`;
//! - an entry present only on the old side becomes `{"removed": value}`;
//! - differing leaves become `{"changed": {"from": old, "to": new}}`.

use serde_json::{json, Map, Value};

/// Computes the structured diff from `old` to `new`.
///
/// Returns `None` when the values are equal.
pub fn diff_values(old: &Value, new: &Value) -> Option<Value> {
    if old == new {
        return None;
    }

    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            let mut diff = Map::new();
            for (key, old_value) in old_map {
                match new_map.get(key) {
                    Some(new_value) => {
                        if let Some(node) = diff_values(old_value, new_value) {
                            diff.insert(key.clone(), node);
                        }
                    }
                    None => {
                        diff.insert(key.clone(), json!({ "removed": old_value }));
                    }
                }
            }
            for (key, new_value) in new_map {
                if !old_map.contains_key(key) {
                    diff.insert(key.clone(), json!({ "added": new_value }));
                }
            }
            Some(Value::Object(diff))
        }
        (Value::Array(old_items), Value::Array(new_items)) => {
            let mut diff = Map::new();
            let shared = old_items.len().min(new_items.len());
            for index in 0..shared {
                if let Some(node) = diff_values(&old_items[index], &new_items[index]) {
                    diff.insert(index.to_string(), node);
                }
            }
            for (index, old_value) in old_items.iter().enumerate().skip(shared) {
                diff.insert(index.to_string(), json!({ "removed": old_value }));
            }
            for (index, new_value) in new_items.iter().enumerate().skip(shared) {
                diff.insert(index.to_string(), json!({ "added": new_value }));
            }
            Some(Value::Object(diff))
        }
        _ => Some(json!({ "changed": { "from": old, "to": new } })),
    }
}
