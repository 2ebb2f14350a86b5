// src/core/json.rs
//
// Tolerant-but-strict accessors over untyped payloads.
// Every miss reports the dotted path that failed, e.g. `seriesMapProto[2].series`.

use serde_json::Value;

use crate::error::ShapeError;
use crate::table::Cell;

pub fn key_path(at: &str, key: &str) -> String {
    if at.is_empty() { s!(key) } else { format!("{at}.{key}") }
}

pub fn index_path(at: &str, i: usize) -> String {
    format!("{at}[{i}]")
}

/// `v[key]`, failing when `v` is not an object or lacks the key.
pub fn field<'a>(v: &'a Value, key: &str, at: &str) -> Result<&'a Value, ShapeError> {
    v.get(key)
        .ok_or_else(|| ShapeError::new(key_path(at, key), "a value (key missing)"))
}

pub fn array_field<'a>(v: &'a Value, key: &str, at: &str) -> Result<&'a [Value], ShapeError> {
    let path = key_path(at, key);
    field(v, key, at)?
        .as_array()
        .map(|a| a.as_slice())
        .ok_or_else(|| ShapeError::new(path, "an array"))
}

pub fn scalar_field(v: &Value, key: &str, at: &str) -> Result<Cell, ShapeError> {
    to_cell(field(v, key, at)?, &key_path(at, key))
}

/// JSON scalar → cell. Arrays and objects are not scalars.
pub fn to_cell(v: &Value, path: &str) -> Result<Cell, ShapeError> {
    match v {
        Value::Null => Ok(Cell::Null),
        Value::Bool(b) => Ok(Cell::Bool(*b)),
        Value::String(s) => Ok(Cell::Text(s.clone())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Cell::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Cell::Float(f))
            } else {
                Err(ShapeError::new(path, "a representable number"))
            }
        }
        Value::Array(_) | Value::Object(_) => Err(ShapeError::new(path, "a scalar")),
    }
}

/// Scalar rendered as text; used where the payload's type is irrelevant (ids, labels).
pub fn to_label(v: &Value, path: &str) -> Result<String, ShapeError> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(s!()),
        other => to_cell(other, path).map(|c| c.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_missing_path() {
        let v = json!({ "outer": { "inner": 1 } });
        let outer = field(&v, "outer", "").unwrap();
        let err = field(outer, "nope", "outer").unwrap_err();
        assert_eq!(err.path, "outer.nope");
    }

    #[test]
    fn non_array_is_a_shape_error() {
        let v = json!({ "values": "not a list" });
        let err = array_field(&v, "values", "").unwrap_err();
        assert_eq!(err.path, "values");
        assert_eq!(err.expected, "an array");
    }

    #[test]
    fn scalars_keep_their_type() {
        assert_eq!(to_cell(&json!(1), "x").unwrap(), Cell::Int(1));
        assert_eq!(to_cell(&json!(50.5), "x").unwrap(), Cell::Float(50.5));
        assert_eq!(to_cell(&json!("t1"), "x").unwrap(), Cell::Text(s!("t1")));
        assert_eq!(to_cell(&json!(null), "x").unwrap(), Cell::Null);
        assert!(to_cell(&json!([1]), "x").is_err());
        assert!(to_cell(&json!({}), "x").is_err());
    }

    #[test]
    fn labels_stringify_numbers() {
        assert_eq!(to_label(&json!(7607), "id").unwrap(), "7607");
        assert_eq!(to_label(&json!("7607"), "id").unwrap(), "7607");
    }
}
