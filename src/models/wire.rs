//! Typed accessors over untyped JSON values.
//!
//! Every accessor takes the wire key it is reading so that failures name the
//! offending field. Numbers are read as `f64` and narrowed with `as`, because
//! the wire format does not distinguish integers from floats; a fractional
//! value is truncated, not rejected.

use serde_json::{Map, Value};

use crate::domain::types::Range;
use crate::models::errors::{DecodeError, DecodeResult};

pub type Object = Map<String, Value>;

const STRING: &str = "string";
const ARRAY: &str = "array";
const NUMBER: &str = "number";
const BOOL: &str = "bool";
const OBJECT: &str = "object";

/// Looks up `key`, failing with [`DecodeError::FieldMissing`] when absent.
pub fn require_field<'a>(object: &'a Object, key: &str) -> DecodeResult<&'a Value> {
    object.get(key).ok_or_else(|| DecodeError::missing(key))
}

pub fn as_object<'a>(value: &'a Value, field: &str) -> DecodeResult<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::mismatch(field, OBJECT))
}

pub fn as_array<'a>(value: &'a Value, field: &str) -> DecodeResult<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| DecodeError::mismatch(field, ARRAY))
}

pub fn as_string(value: &Value, field: &str) -> DecodeResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::mismatch(field, STRING))
}

pub fn as_bool(value: &Value, field: &str) -> DecodeResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| DecodeError::mismatch(field, BOOL))
}

fn as_f64(value: &Value, field: &str) -> DecodeResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| DecodeError::mismatch(field, NUMBER))
}

pub fn as_i64(value: &Value, field: &str) -> DecodeResult<i64> {
    as_f64(value, field).map(|n| n as i64)
}

pub fn as_i32(value: &Value, field: &str) -> DecodeResult<i32> {
    as_f64(value, field).map(|n| n as i32)
}

/// Decodes a homogeneous list, aborting on the first bad element.
fn as_list<T>(
    value: &Value,
    field: &str,
    element: impl Fn(&Value, &str) -> DecodeResult<T>,
) -> DecodeResult<Vec<T>> {
    as_array(value, field)?
        .iter()
        .map(|item| element(item, field))
        .collect()
}

pub fn as_string_list(value: &Value, field: &str) -> DecodeResult<Vec<String>> {
    as_list(value, field, as_string)
}

pub fn as_i32_list(value: &Value, field: &str) -> DecodeResult<Vec<i32>> {
    as_list(value, field, as_i32)
}

/// Element types are checked before arity, so `["a"]` is a type mismatch
/// rather than an arity error.
fn as_pair<T: Copy>(
    value: &Value,
    field: &str,
    element: impl Fn(&Value, &str) -> DecodeResult<T>,
) -> DecodeResult<Range<T>> {
    let items = as_list(value, field, element)?;
    match items.as_slice() {
        [min, max] => Ok((*min, *max)),
        _ => Err(DecodeError::ArityError {
            field: field.to_string(),
            expected: 2,
            actual: items.len(),
        }),
    }
}

pub fn as_i64_pair(value: &Value, field: &str) -> DecodeResult<Range<i64>> {
    as_pair(value, field, as_i64)
}

pub fn as_i32_pair(value: &Value, field: &str) -> DecodeResult<Range<i32>> {
    as_pair(value, field, as_i32)
}

/// Field-by-field reader over one JSON object.
///
/// Each method requires its key to be present and of the named type.
pub struct Fields<'a> {
    object: &'a Object,
}

impl<'a> Fields<'a> {
    pub fn new(object: &'a Object) -> Self {
        Self { object }
    }

    pub fn has(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    pub fn value(&self, key: &str) -> DecodeResult<&'a Value> {
        require_field(self.object, key)
    }

    pub fn string(&self, key: &str) -> DecodeResult<String> {
        as_string(self.value(key)?, key)
    }

    pub fn bool(&self, key: &str) -> DecodeResult<bool> {
        as_bool(self.value(key)?, key)
    }

    pub fn i64(&self, key: &str) -> DecodeResult<i64> {
        as_i64(self.value(key)?, key)
    }

    pub fn i32(&self, key: &str) -> DecodeResult<i32> {
        as_i32(self.value(key)?, key)
    }

    pub fn string_list(&self, key: &str) -> DecodeResult<Vec<String>> {
        as_string_list(self.value(key)?, key)
    }

    pub fn i32_list(&self, key: &str) -> DecodeResult<Vec<i32>> {
        as_i32_list(self.value(key)?, key)
    }

    pub fn i64_pair(&self, key: &str) -> DecodeResult<Range<i64>> {
        as_i64_pair(self.value(key)?, key)
    }

    pub fn i32_pair(&self, key: &str) -> DecodeResult<Range<i32>> {
        as_i32_pair(self.value(key)?, key)
    }
}
