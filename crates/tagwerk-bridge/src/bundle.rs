// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed parameter bundle built from the relay's JSON-encoded parameters.
//
// The native SDK records typed values, not raw JSON. This module converts a
// decoded parameter object into a `ParamBundle`:
//
//   - nested objects become nested bundles (recursive);
//   - arrays are homogeneous, typed by their FIRST element; an element of a
//     different type is a conversion error;
//   - empty arrays and nulls are skipped;
//   - an array whose first element is a null or another array is skipped
//     with a trace.
//
// Any conversion error aborts the whole bundle; the caller records the
// event with an empty bundle instead.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use tagwerk_core::error::{Result, TagwerkError};
use tracing::debug;

/// A typed value stored in a [`ParamBundle`].
#[derive(Debug, Clone, PartialEq)]
pub enum BundleValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A nested parameter bundle (from a JSON object).
    Bundle(ParamBundle),
    /// An array of bundles (from a JSON array of objects).
    BundleArray(Vec<ParamBundle>),
    StrArray(Vec<String>),
    IntArray(Vec<i64>),
    FloatArray(Vec<f64>),
    BoolArray(Vec<bool>),
}

/// Typed key-value container handed to the analytics sink.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamBundle(BTreeMap<String, BundleValue>);

impl ParamBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&BundleValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: BundleValue) {
        self.0.insert(key.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BundleValue)> {
        self.0.iter()
    }

    /// Parse a JSON string and convert it into a bundle.
    ///
    /// The top-level value must be an object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(object) => Self::from_object(&object),
            other => Err(TagwerkError::BundleConversion(format!(
                "top-level parameters must be an object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Convert a decoded JSON object into a bundle.
    pub fn from_object(object: &Map<String, Value>) -> Result<Self> {
        let mut bundle = ParamBundle::new();

        for (key, value) in object {
            match value {
                Value::Object(nested) => {
                    bundle.insert(key, BundleValue::Bundle(Self::from_object(nested)?));
                }
                Value::Array(items) => {
                    if let Some(converted) = convert_array(key, items)? {
                        bundle.insert(key, converted);
                    }
                }
                Value::String(s) => bundle.insert(key, BundleValue::Str(s.clone())),
                Value::Number(n) => {
                    if let Some(converted) = convert_number(key, n) {
                        bundle.insert(key, converted);
                    }
                }
                Value::Bool(b) => bundle.insert(key, BundleValue::Bool(*b)),
                Value::Null => {
                    debug!(%key, "skipping null value");
                }
            }
        }

        Ok(bundle)
    }
}

impl<'a> IntoIterator for &'a ParamBundle {
    type Item = (&'a String, &'a BundleValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, BundleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Integral JSON numbers map to `Int`, everything else to `Float`.
fn convert_number(key: &str, n: &Number) -> Option<BundleValue> {
    if let Some(i) = n.as_i64() {
        Some(BundleValue::Int(i))
    } else if let Some(f) = n.as_f64() {
        Some(BundleValue::Float(f))
    } else {
        debug!(key, number = %n, "unhandled number for key");
        None
    }
}

/// Convert one JSON array into a typed array value.
///
/// `Ok(None)` means the key is skipped (empty array, or an unhandled first
/// element type). A heterogeneous array is an error.
fn convert_array(key: &str, items: &[Value]) -> Result<Option<BundleValue>> {
    let Some(first) = items.first() else {
        return Ok(None);
    };

    let converted = match first {
        Value::Object(_) => {
            let mut bundles = Vec::with_capacity(items.len());
            for item in items {
                let Value::Object(object) = item else {
                    return Err(mixed_array(key));
                };
                bundles.push(ParamBundle::from_object(object)?);
            }
            BundleValue::BundleArray(bundles)
        }
        Value::String(_) => {
            let mut strings = Vec::with_capacity(items.len());
            for item in items {
                let Value::String(s) = item else {
                    return Err(mixed_array(key));
                };
                strings.push(s.clone());
            }
            BundleValue::StrArray(strings)
        }
        Value::Number(n) if n.as_i64().is_some() => {
            let mut ints = Vec::with_capacity(items.len());
            for item in items {
                let Some(i) = item.as_i64() else {
                    return Err(mixed_array(key));
                };
                ints.push(i);
            }
            BundleValue::IntArray(ints)
        }
        Value::Number(_) => {
            let mut floats = Vec::with_capacity(items.len());
            for item in items {
                let Some(f) = item.as_f64() else {
                    return Err(mixed_array(key));
                };
                floats.push(f);
            }
            BundleValue::FloatArray(floats)
        }
        Value::Bool(_) => {
            let mut bools = Vec::with_capacity(items.len());
            for item in items {
                let Value::Bool(b) = item else {
                    return Err(mixed_array(key));
                };
                bools.push(*b);
            }
            BundleValue::BoolArray(bools)
        }
        Value::Null | Value::Array(_) => {
            debug!(key, "unhandled array type for key");
            return Ok(None);
        }
    };

    Ok(Some(converted))
}

fn mixed_array(key: &str) -> TagwerkError {
    TagwerkError::BundleConversion(format!("mixed element types in array '{key}'"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle_from(value: Value) -> Result<ParamBundle> {
        let Value::Object(object) = value else {
            panic!("test payload must be an object");
        };
        ParamBundle::from_object(&object)
    }

    #[test]
    fn scalars_become_typed_entries() {
        let bundle = bundle_from(json!({
            "method": "email",
            "count": 3,
            "price": 9.99,
            "sale": true,
        }))
        .expect("convert");

        assert_eq!(bundle.get("method"), Some(&BundleValue::Str("email".into())));
        assert_eq!(bundle.get("count"), Some(&BundleValue::Int(3)));
        assert_eq!(bundle.get("price"), Some(&BundleValue::Float(9.99)));
        assert_eq!(bundle.get("sale"), Some(&BundleValue::Bool(true)));
    }

    #[test]
    fn nested_objects_become_nested_bundles() {
        let bundle = bundle_from(json!({
            "item": {"id": "sku1", "price": 9.99},
        }))
        .expect("convert");

        let Some(BundleValue::Bundle(nested)) = bundle.get("item") else {
            panic!("expected nested bundle");
        };
        assert_eq!(nested.get("id"), Some(&BundleValue::Str("sku1".into())));
        assert_eq!(nested.get("price"), Some(&BundleValue::Float(9.99)));
    }

    #[test]
    fn object_arrays_become_bundle_arrays() {
        let bundle = bundle_from(json!({
            "items": [{"id": "sku1"}, {"id": "sku2"}],
        }))
        .expect("convert");

        let Some(BundleValue::BundleArray(items)) = bundle.get("items") else {
            panic!("expected bundle array");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].get("id"), Some(&BundleValue::Str("sku2".into())));
    }

    #[test]
    fn primitive_arrays_keep_their_type() {
        let bundle = bundle_from(json!({
            "tags": ["a", "b"],
            "counts": [1, 2, 3],
            "weights": [0.5, 1.5],
            "flags": [true, false],
        }))
        .expect("convert");

        assert_eq!(
            bundle.get("tags"),
            Some(&BundleValue::StrArray(vec!["a".into(), "b".into()]))
        );
        assert_eq!(bundle.get("counts"), Some(&BundleValue::IntArray(vec![1, 2, 3])));
        assert_eq!(
            bundle.get("weights"),
            Some(&BundleValue::FloatArray(vec![0.5, 1.5]))
        );
        assert_eq!(
            bundle.get("flags"),
            Some(&BundleValue::BoolArray(vec![true, false]))
        );
    }

    #[test]
    fn empty_arrays_and_nulls_are_skipped() {
        let bundle = bundle_from(json!({
            "empty": [],
            "missing": null,
            "kept": 1,
        }))
        .expect("convert");

        assert_eq!(bundle.len(), 1);
        assert!(bundle.get("empty").is_none());
        assert!(bundle.get("missing").is_none());
    }

    #[test]
    fn mixed_array_is_a_conversion_error() {
        let result = bundle_from(json!({"bad": ["a", 1]}));
        assert!(matches!(result, Err(TagwerkError::BundleConversion(_))));
    }

    #[test]
    fn array_of_arrays_is_skipped_not_fatal() {
        let bundle = bundle_from(json!({
            "matrix": [[1, 2], [3, 4]],
            "kept": "yes",
        }))
        .expect("convert");

        assert!(bundle.get("matrix").is_none());
        assert_eq!(bundle.get("kept"), Some(&BundleValue::Str("yes".into())));
    }

    #[test]
    fn from_json_rejects_non_object_top_level() {
        assert!(ParamBundle::from_json("[1, 2, 3]").is_err());
        assert!(ParamBundle::from_json("not json at all").is_err());
    }

    #[test]
    fn from_json_parses_the_relay_encoding() {
        let bundle = ParamBundle::from_json(
            r#"{"currency":"AUD","value":0,"items":[{"id":"sku1","price":9.99}]}"#,
        )
        .expect("convert");

        assert_eq!(bundle.get("currency"), Some(&BundleValue::Str("AUD".into())));
        assert_eq!(bundle.get("value"), Some(&BundleValue::Int(0)));
        let Some(BundleValue::BundleArray(items)) = bundle.get("items") else {
            panic!("expected bundle array");
        };
        assert_eq!(items[0].get("price"), Some(&BundleValue::Float(9.99)));
    }
}
