use serde_json::Value;

/// Collect every string found at any depth of `value`, in iteration order.
///
/// Scalars other than strings contribute nothing. Arrays are recursed per
/// element and objects per value; object keys are never harvested. The
/// manifest format puts urls in values, not keys.
#[must_use]
pub fn harvest_strings(value: &Value) -> Vec<String> {
    let mut strings = Vec::new();
    walk(value, &mut strings);
    strings
}

fn walk(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
        Value::String(s) => out.push(s.clone()),
        Value::Array(elems) => {
            for elem in elems {
                walk(elem, out);
            }
        }
        Value::Object(map) => {
            for elem in map.values() {
                walk(elem, out);
            }
        }
    }
}
