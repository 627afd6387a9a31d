//! Helpers over parsed `serde_json::Value` trees: key sorting, dotted-path
//! extraction, and the structural compare behind the JSON-compare tool.

use serde_json::{Map, Value};

/// Recursively rebuild `v` with object keys in lexicographic order.
/// Arrays are mapped element-wise; scalars are cloned as-is.
pub fn sort_keys(v: &Value) -> Value {
    match v {
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = Map::with_capacity(map.len());
            for k in keys {
                if let Some(child) = map.get(k) {
                    out.insert(k.clone(), sort_keys(child));
                }
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

/// Look up a value by a dotted path like `a.b[0].c`.
///
/// `[N]` is sugar for `.N`; empty segments are skipped, so `a..b` and
/// `.a.b` behave like `a.b`. Any step that does not resolve yields `None`.
pub fn get_by_path<'v>(v: &'v Value, path: &str) -> Option<&'v Value> {
    let mut cur = v;
    for seg in path
        .split(['.', '['])
        .map(|s| s.trim_end_matches(']'))
        .filter(|s| !s.is_empty())
    {
        cur = match cur {
            Value::Object(map) => map.get(seg)?,
            Value::Array(items) => items.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(cur)
}

/// Compare two value trees, reporting one human-readable line per
/// divergence, with `$`-rooted paths. Empty output means equal.
///
/// Arrays report a length mismatch and then compare the common prefix
/// element-wise; objects walk the sorted union of keys.
pub fn structural_diff(a: &Value, b: &Value) -> Vec<String> {
    let mut diffs = Vec::new();
    walk(a, b, "$", &mut diffs);
    diffs
}

fn walk(a: &Value, b: &Value, base: &str, diffs: &mut Vec<String>) {
    match (a, b) {
        (Value::Array(pa), Value::Array(pb)) => {
            if pa.len() != pb.len() {
                diffs.push(format!("{}: length {} vs {}", base, pa.len(), pb.len()));
            }
            for (i, (va, vb)) in pa.iter().zip(pb.iter()).enumerate() {
                walk(va, vb, &format!("{base}[{i}]"), diffs);
            }
        }
        (Value::Object(pa), Value::Object(pb)) => {
            let mut keys: Vec<&String> = pa.keys().chain(pb.keys()).collect();
            keys.sort();
            keys.dedup();
            for k in keys {
                let path = format!("{base}.{k}");
                match (pa.get(k), pb.get(k)) {
                    (None, _) => diffs.push(format!("{path}: missing in A")),
                    (_, None) => diffs.push(format!("{path}: missing in B")),
                    (Some(va), Some(vb)) => {
                        let (ta, tb) = (type_name(va), type_name(vb));
                        if ta != tb {
                            diffs.push(format!("{path}: type {ta} vs {tb}"));
                        } else if is_scalar(va) && va != vb {
                            diffs.push(format!("{path}: value differs"));
                        } else {
                            walk(va, vb, &path, diffs);
                        }
                    }
                }
            }
        }
        _ => {
            if a != b {
                diffs.push(format!("{base}: value differs"));
            }
        }
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_scalar(v: &Value) -> bool {
    !matches!(v, Value::Array(_) | Value::Object(_))
}
