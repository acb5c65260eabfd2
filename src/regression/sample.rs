use std::ops::Deref;

use serde_json::{Map, Value};

use crate::regression::{Axis, Error};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Non-empty sequence of samples, in the order they were posted.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet(Vec<Sample>);

impl SampleSet {
    /// Returns [`None`] for an empty input.
    pub fn new(samples: Vec<Sample>) -> Option<Self> {
        (!samples.is_empty()).then_some(Self(samples))
    }
}

impl Deref for SampleSet {
    type Target = [Sample];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Parses the request body into the samples.
///
/// Expected shape is `{"X": [[x₀, x₁, …]], "Y": [[y₀, y₁, …]]}`:
/// only the first inner array of each field is used.
pub fn extract(body: &[u8]) -> Result<SampleSet, Error> {
    if body.is_empty() {
        return Err(Error::EmptyBody);
    }
    let document: Value = serde_json::from_slice(body).map_err(|_| Error::InvalidJson)?;
    let object = match document {
        Value::Object(object) if !object.is_empty() => object,
        _ => return Err(Error::InvalidJson),
    };

    let x_field = get_field(&object, Axis::X)?;
    let y_field = get_field(&object, Axis::Y)?;
    let xs = first_inner_array(x_field).ok_or(Error::EmptyArray(Axis::X))?;
    let ys = first_inner_array(y_field).ok_or(Error::EmptyArray(Axis::Y))?;
    if xs.len() != ys.len() {
        return Err(Error::SizeMismatch);
    }

    let samples = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| Sample {
            x: coerce(x),
            y: coerce(y),
        })
        .collect();
    SampleSet::new(samples).ok_or(Error::EmptyArray(Axis::X))
}

fn get_field(object: &Map<String, Value>, axis: Axis) -> Result<&Value, Error> {
    object
        .get(axis.field_name())
        .ok_or(Error::MissingField(axis))
}

fn first_inner_array(value: &Value) -> Option<&Vec<Value>> {
    value
        .as_array()?
        .first()?
        .as_array()
        .filter(|inner| !inner.is_empty())
}

/// Converts the array entry into a number, falling back to zero.
///
/// Malformed entries do **not** fail the request: numeric strings are parsed,
/// booleans become `1` or `0`, and everything else is taken as `0`.
fn coerce(value: &Value) -> f64 {
    let number = match value {
        Value::Number(number) => number.as_f64().unwrap_or_default(),
        Value::String(string) => string.trim().parse().unwrap_or_default(),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if number.is_finite() {
        number
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn extract_value(value: Value) -> Result<SampleSet, Error> {
        extract(value.to_string().as_bytes())
    }

    #[test]
    fn extract_ok() -> crate::prelude::Result {
        let samples = extract(br#"{"X": [[1, 2.5, -3]], "Y": [[4, 5, 6]]}"#)?;
        assert_eq!(
            *samples,
            [
                Sample { x: 1.0, y: 4.0 },
                Sample { x: 2.5, y: 5.0 },
                Sample { x: -3.0, y: 6.0 },
            ]
        );
        Ok(())
    }

    #[test]
    fn extract_uses_first_inner_array_only() -> crate::prelude::Result {
        let samples = extract_value(json!({"X": [[1, 2], [7, 8, 9]], "Y": [[3, 4], [0]]}))?;
        assert_eq!(*samples, [Sample { x: 1.0, y: 3.0 }, Sample { x: 2.0, y: 4.0 }]);
        Ok(())
    }

    #[test]
    fn extract_coerces_malformed_entries() -> crate::prelude::Result {
        let samples = extract_value(json!({
            "X": [[" 1.5 ", "abc", true, null, [1], {"a": 1}]],
            "Y": [[false, "1e3", 2, "NaN", "inf", 3]],
        }))?;
        let xs: Vec<f64> = samples.iter().map(|sample| sample.x).collect();
        let ys: Vec<f64> = samples.iter().map(|sample| sample.y).collect();
        assert_eq!(xs, [1.5, 0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(ys, [0.0, 1000.0, 2.0, 0.0, 0.0, 3.0]);
        Ok(())
    }

    #[test]
    fn extract_empty_body() {
        assert_eq!(extract(b""), Err(Error::EmptyBody));
    }

    #[test]
    fn extract_invalid_json() {
        assert_eq!(extract(b"{\"X\": [[1]"), Err(Error::InvalidJson));
        assert_eq!(extract(b"   "), Err(Error::InvalidJson));
    }

    #[test]
    fn extract_not_an_object() {
        assert_eq!(extract_value(json!([[1, 2], [3, 4]])), Err(Error::InvalidJson));
        assert_eq!(extract_value(json!(42)), Err(Error::InvalidJson));
        assert_eq!(extract(b"{}"), Err(Error::InvalidJson));
    }

    #[test]
    fn extract_missing_fields() {
        assert_eq!(extract_value(json!({"Y": [[1]]})), Err(Error::MissingField(Axis::X)));
        assert_eq!(extract_value(json!({"X": [[1, 2, 3]]})), Err(Error::MissingField(Axis::Y)));
        assert_eq!(extract_value(json!({"x": [[1]], "y": [[1]]})), Err(Error::MissingField(Axis::X)));
    }

    #[test]
    fn extract_missing_field_wins_over_empty_array() {
        assert_eq!(extract_value(json!({"X": []})), Err(Error::MissingField(Axis::Y)));
    }

    #[test]
    fn extract_empty_arrays() {
        assert_eq!(extract_value(json!({"X": [], "Y": [[1]]})), Err(Error::EmptyArray(Axis::X)));
        assert_eq!(extract_value(json!({"X": [[]], "Y": [[1]]})), Err(Error::EmptyArray(Axis::X)));
        assert_eq!(extract_value(json!({"X": [1, 2], "Y": [[1]]})), Err(Error::EmptyArray(Axis::X)));
        assert_eq!(extract_value(json!({"X": "1", "Y": [[1]]})), Err(Error::EmptyArray(Axis::X)));
        assert_eq!(extract_value(json!({"X": [[1]], "Y": [[]]})), Err(Error::EmptyArray(Axis::Y)));
        assert_eq!(extract_value(json!({"X": [[1]], "Y": null})), Err(Error::EmptyArray(Axis::Y)));
    }

    #[test]
    fn extract_size_mismatch() {
        assert_eq!(
            extract_value(json!({"X": [[1, 2]], "Y": [[1, 2, 3]]})),
            Err(Error::SizeMismatch),
        );
    }
}
