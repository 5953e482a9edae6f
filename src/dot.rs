//! Dot-notation access into nested JSON values.
//!
//! A path is a period-delimited list of segments (`users.0.name`). Segments
//! index into objects by key and into arrays by number. The wildcard segment
//! `*` fans out over every element at that level (array items or object
//! values) and is honored by `get_all`, `set`, and `fill`.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

const WILDCARD: &str = "*";

/// Split a path into segments, rejecting empty paths and empty segments.
fn segments(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(Error::validation_invalid_argument(
            "path",
            "Path cannot be empty",
            None,
        ));
    }

    let segs: Vec<&str> = path.split('.').collect();
    for seg in &segs {
        if seg.is_empty() {
            return Err(Error::path_invalid_segment(
                path,
                "",
                "Empty segment (consecutive or trailing '.')",
            ));
        }
    }

    Ok(segs)
}

/// Read the value at a dot path. Returns `None` on any miss: absent key,
/// index out of range, numeric segment against an object, or traversal
/// into a scalar.
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for seg in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(seg)?,
            Value::Array(arr) => arr.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Read the value at a dot path, cloning it, or fall back to `default`.
pub fn get_or(root: &Value, path: &str, default: Value) -> Value {
    get(root, path).cloned().unwrap_or(default)
}

/// Mutable counterpart of [`get`]. Does not create intermediate levels.
pub fn get_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    let mut current = root;
    for seg in path.split('.') {
        current = match current {
            Value::Object(map) => map.get_mut(seg)?,
            Value::Array(arr) => {
                let idx = seg.parse::<usize>().ok()?;
                arr.get_mut(idx)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Collect every value a wildcard-aware path resolves to.
///
/// Without a `*` segment this returns zero or one element. A `*` segment
/// over a scalar contributes nothing.
///
/// Like the other read accessors (and unlike `set`/`fill`, which return
/// validation errors), a malformed path is treated as a miss: an empty
/// path or empty segment yields an empty `Vec`.
pub fn get_all<'a>(root: &'a Value, path: &str) -> Vec<&'a Value> {
    fn walk<'a>(node: &'a Value, segs: &[&str], out: &mut Vec<&'a Value>) {
        let Some((seg, rest)) = segs.split_first() else {
            out.push(node);
            return;
        };

        if *seg == WILDCARD {
            match node {
                Value::Array(arr) => {
                    for item in arr {
                        walk(item, rest, out);
                    }
                }
                Value::Object(map) => {
                    for item in map.values() {
                        walk(item, rest, out);
                    }
                }
                _ => {}
            }
            return;
        }

        let child = match node {
            Value::Object(map) => map.get(*seg),
            Value::Array(arr) => seg.parse::<usize>().ok().and_then(|idx| arr.get(idx)),
            _ => None,
        };

        if let Some(child) = child {
            walk(child, rest, out);
        }
    }

    let mut out = Vec::new();
    if let Ok(segs) = segments(path) {
        walk(root, &segs, &mut out);
    }
    out
}

/// Write `value` at a dot path, creating intermediate objects as needed.
///
/// Existing values along the way are overwritten; a scalar intermediate is
/// replaced by a fresh object so the write can proceed. A `*` segment fans
/// the write out over every element at that level.
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<()> {
    let segs = segments(path)?;
    apply(root, path, &segs, &value, true)
}

/// Like [`set`], but never overwrites: only missing keys and null slots are
/// written, and a scalar intermediate stops the descent instead of being
/// replaced.
pub fn fill(root: &mut Value, path: &str, value: Value) -> Result<()> {
    let segs = segments(path)?;
    apply(root, path, &segs, &value, false)
}

fn apply(
    node: &mut Value,
    path: &str,
    segs: &[&str],
    value: &Value,
    overwrite: bool,
) -> Result<()> {
    let Some((seg, rest)) = segs.split_first() else {
        if overwrite || node.is_null() {
            *node = value.clone();
        }
        return Ok(());
    };

    if *seg == WILDCARD {
        // Fan out; a wildcard over a scalar leaves the target unchanged.
        match node {
            Value::Array(arr) => {
                for item in arr.iter_mut() {
                    apply(item, path, rest, value, overwrite)?;
                }
            }
            Value::Object(map) => {
                for item in map.values_mut() {
                    apply(item, path, rest, value, overwrite)?;
                }
            }
            _ => {}
        }
        return Ok(());
    }

    let child = match node {
        Value::Object(map) => map.entry(seg.to_string()).or_insert(Value::Null),
        Value::Array(arr) => {
            let idx = seg.parse::<usize>().map_err(|_| {
                Error::path_invalid_segment(path, *seg, "Array level requires a numeric segment")
            })?;
            let len = arr.len();
            arr.get_mut(idx)
                .ok_or_else(|| Error::path_index_out_of_bounds(path, idx, len))?
        }
        Value::Null => {
            *node = Value::Object(Map::new());
            match node {
                Value::Object(map) => map.entry(seg.to_string()).or_insert(Value::Null),
                _ => unreachable!(),
            }
        }
        _ => {
            if !overwrite {
                return Ok(());
            }
            *node = Value::Object(Map::new());
            match node {
                Value::Object(map) => map.entry(seg.to_string()).or_insert(Value::Null),
                _ => unreachable!(),
            }
        }
    };

    apply(child, path, rest, value, overwrite)
}

/// Remove the value at a dot path. Object keys are deleted; array elements
/// are removed, shifting later elements down. Returns whether anything was
/// actually removed.
pub fn forget(root: &mut Value, path: &str) -> bool {
    let Ok(segs) = segments(path) else {
        return false;
    };

    let (last, parents) = match segs.split_last() {
        Some(pair) => pair,
        None => return false,
    };

    let mut current = root;
    for seg in parents {
        current = match current {
            Value::Object(map) => match map.get_mut(*seg) {
                Some(child) => child,
                None => return false,
            },
            Value::Array(arr) => {
                let Some(idx) = seg.parse::<usize>().ok() else {
                    return false;
                };
                match arr.get_mut(idx) {
                    Some(child) => child,
                    None => return false,
                }
            }
            _ => return false,
        };
    }

    match current {
        Value::Object(map) => map.remove(*last).is_some(),
        Value::Array(arr) => match last.parse::<usize>() {
            Ok(idx) if idx < arr.len() => {
                arr.remove(idx);
                true
            }
            _ => false,
        },
        _ => false,
    }
}
