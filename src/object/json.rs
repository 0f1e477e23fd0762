//! JSON pretty-printing with sorted keys.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::error::ObjectError;

/// Serialize `value` as JSON indented by four spaces, with object keys sorted.
pub fn json_str<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    let value = sort_keys(serde_json::to_value(value)?);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `json_str(value)` followed by a newline.
pub fn print_json<T, W>(value: &T, out: &mut W) -> Result<(), ObjectError>
where
    T: Serialize + ?Sized,
    W: Write + ?Sized,
{
    let mut text = json_str(value)?;
    text.push('\n');
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
