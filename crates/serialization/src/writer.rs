//! JSON object writer.
//!
//! Models call one typed writer per declared field, unconditionally; the writer
//! drops `None` values, so the output carries exactly the populated fields plus
//! whatever [`AdditionalData`] re-emits. Explicit nulls only appear through
//! [`SerializationWriter::write_null_value`] or null-valued additional-data
//! entries.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::WriteError;
use crate::parsable::{AdditionalData, Parsable};
use crate::wire_enum::WireEnum;

/// Accumulates one JSON object, in field-write order.
#[derive(Debug, Default)]
pub struct SerializationWriter {
    entries: Map<String, Value>,
}

impl SerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_string_value(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.entries.insert(key.to_string(), Value::String(v.to_string()));
        }
    }

    pub fn write_bool_value(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.entries.insert(key.to_string(), Value::Bool(v));
        }
    }

    pub fn write_i32_value(&mut self, key: &str, value: Option<i32>) {
        if let Some(v) = value {
            self.entries.insert(key.to_string(), Value::from(v));
        }
    }

    pub fn write_i64_value(&mut self, key: &str, value: Option<i64>) {
        if let Some(v) = value {
            self.entries.insert(key.to_string(), Value::from(v));
        }
    }

    /// Fails on NaN and infinities, which JSON cannot represent.
    pub fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), WriteError> {
        if let Some(v) = value {
            let n = serde_json::Number::from_f64(v).ok_or_else(|| WriteError::NonFiniteNumber {
                property: key.to_string(),
            })?;
            self.entries.insert(key.to_string(), Value::Number(n));
        }
        Ok(())
    }

    pub fn write_uuid_value(&mut self, key: &str, value: Option<&Uuid>) {
        if let Some(v) = value {
            self.entries.insert(key.to_string(), Value::String(v.to_string()));
        }
    }

    pub fn write_time_value(&mut self, key: &str, value: Option<&DateTime<FixedOffset>>) {
        if let Some(v) = value {
            self.entries.insert(key.to_string(), Value::String(v.to_rfc3339()));
        }
    }

    pub fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) {
        if let Some(v) = value {
            self.entries.insert(key.to_string(), Value::String(BASE64.encode(v)));
        }
    }

    pub fn write_collection_of_primitive_values<T>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
        to_value: impl Fn(&T) -> Value,
    ) {
        if let Some(vs) = values {
            self.entries
                .insert(key.to_string(), Value::Array(vs.iter().map(&to_value).collect()));
        }
    }

    pub fn write_collection_of_string_values(&mut self, key: &str, values: Option<&[String]>) {
        self.write_collection_of_primitive_values(key, values, |s| Value::String(s.clone()));
    }

    pub fn write_object_value<T: Parsable>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), WriteError> {
        if let Some(v) = value {
            let mut child = SerializationWriter::new();
            v.serialize(&mut child)?;
            self.entries.insert(key.to_string(), Value::Object(child.entries));
        }
        Ok(())
    }

    pub fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), WriteError> {
        if let Some(vs) = values {
            let mut items = Vec::with_capacity(vs.len());
            for v in vs {
                let mut child = SerializationWriter::new();
                v.serialize(&mut child)?;
                items.push(Value::Object(child.entries));
            }
            self.entries.insert(key.to_string(), Value::Array(items));
        }
        Ok(())
    }

    pub fn write_enum_value<E: WireEnum>(&mut self, key: &str, value: Option<&E>) {
        if let Some(v) = value {
            self.entries
                .insert(key.to_string(), Value::String(v.as_str().to_string()));
        }
    }

    /// Writes an explicit JSON null.
    pub fn write_null_value(&mut self, key: &str) {
        self.entries.insert(key.to_string(), Value::Null);
    }

    /// Re-emits preserved unknown properties verbatim.
    pub fn write_additional_data(&mut self, data: &AdditionalData) {
        for (key, value) in data {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }

    pub fn into_vec(self) -> Result<Vec<u8>, WriteError> {
        Ok(serde_json::to_vec(&Value::Object(self.entries))?)
    }
}

/// Serializes one model to a JSON value.
pub fn serialize_to_value<T: Parsable>(model: &T) -> Result<Value, WriteError> {
    let mut writer = SerializationWriter::new();
    model.serialize(&mut writer)?;
    Ok(writer.into_value())
}

/// Serializes one model to raw JSON bytes.
pub fn serialize_to_vec<T: Parsable>(model: &T) -> Result<Vec<u8>, WriteError> {
    let mut writer = SerializationWriter::new();
    model.serialize(&mut writer)?;
    writer.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_values_omit_the_key() {
        let mut w = SerializationWriter::new();
        w.write_string_value("a", None);
        w.write_bool_value("b", None);
        w.write_i64_value("c", None);
        w.write_f64_value("d", None).unwrap();
        w.write_collection_of_string_values("e", None);
        assert_eq!(w.into_value(), json!({}));
    }

    #[test]
    fn populated_values_are_written_in_order() {
        let mut w = SerializationWriter::new();
        w.write_string_value("name", Some("Outlook"));
        w.write_i64_value("count", Some(42));
        w.write_f64_value("pct", Some(87.5)).unwrap();
        assert_eq!(
            w.into_value(),
            json!({"name": "Outlook", "count": 42, "pct": 87.5})
        );
    }

    #[test]
    fn non_finite_numbers_are_a_write_error() {
        let mut w = SerializationWriter::new();
        let err = w.write_f64_value("pct", Some(f64::NAN)).unwrap_err();
        assert!(matches!(err, WriteError::NonFiniteNumber { .. }));
    }

    #[test]
    fn byte_arrays_encode_as_base64() {
        let mut w = SerializationWriter::new();
        w.write_byte_array_value("key", Some(b"hello"));
        assert_eq!(w.into_value(), json!({"key": "aGVsbG8="}));
    }

    #[test]
    fn null_marker_and_additional_data_round_trip() {
        let mut extra = AdditionalData::new();
        extra.insert("odata.context".to_string(), json!("ctx"));
        extra.insert("serverOnly".to_string(), Value::Null);

        let mut w = SerializationWriter::new();
        w.write_null_value("explicit");
        w.write_additional_data(&extra);
        assert_eq!(
            w.into_value(),
            json!({"explicit": null, "odata.context": "ctx", "serverOnly": null})
        );
    }
}
