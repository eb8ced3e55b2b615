//! Order-sensitive deep merge of scene fragments.
//!
//! Objects merge key by key, recursively. Any other value (scalar, array,
//! null) in the fragment replaces whatever the target held at that key, so
//! the fragment merged last wins for every leaf it defines.

use serde_json::{Map, Value};

/// Merge `fragment` into `target` in place.
pub fn deep_merge(target: &mut Value, fragment: &Value) {
    match (target, fragment) {
        (Value::Object(target_map), Value::Object(fragment_map)) => {
            for (key, value) in fragment_map {
                let slot = target_map.entry(key.clone()).or_insert(Value::Null);
                deep_merge(slot, value);
            }
        }
        (target, fragment) => *target = fragment.clone(),
    }
}

/// Fold fragments left to right into a fresh object.
pub fn merge_all<'a, I>(fragments: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = Value::Object(Map::new());
    for fragment in fragments {
        deep_merge(&mut merged, fragment);
    }
    merged
}
