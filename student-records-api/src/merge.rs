//! Partial-update merging for PUT endpoints that accept sparse bodies.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Merge `patch` over `base`.
///
/// Objects merge member by member; `null` members in the patch keep the
/// stored value; everything else replaces.
pub fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, value) in patch_map {
                if value.is_null() {
                    continue;
                }
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, patch) => *base = patch,
    }
}

/// Build the entity to store from the existing one and a request body.
///
/// Privacy-restricted paths always keep the stored value: a caller who
/// cannot see a property cannot change it either.
pub fn merge_for_update<T>(
    existing: &T,
    body: Value,
    privacy_paths: &[String],
) -> Result<T, serde_json::Error>
where
    T: Serialize + DeserializeOwned,
{
    let stored = serde_json::to_value(existing)?;
    let mut merged = stored.clone();
    merge_json(&mut merged, body);

    for path in privacy_paths {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        restore_path(&mut merged, &stored, &segments);
    }

    serde_json::from_value(merged)
}

fn restore_path(target: &mut Value, stored: &Value, segments: &[&str]) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    let Value::Object(target_map) = target else {
        return;
    };

    match stored.get(*head) {
        Some(stored_child) if rest.is_empty() => {
            target_map.insert(head.to_string(), stored_child.clone());
        }
        Some(stored_child) => {
            if let Some(target_child) = target_map.get_mut(*head) {
                restore_path(target_child, stored_child, rest);
            }
        }
        None if rest.is_empty() => {
            target_map.remove(*head);
        }
        None => {}
    }
}
