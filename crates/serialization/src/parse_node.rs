//! Borrowed typed view over one JSON value.
//!
//! Each accessor returns `Ok(None)` when the underlying value is `null` (null
//! and absent both decode to "unset") and a type-mismatch error when the value
//! is present with the wrong shape.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ParseError;
use crate::parsable::{Parsable, ParsableFactory, ODATA_TYPE};
use crate::wire_enum::WireEnum;

/// One node of the document tree being decoded.
#[derive(Debug, Clone, Copy)]
pub struct ParseNode<'a> {
    value: &'a Value,
}

impl<'a> ParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The raw JSON value this node wraps.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedType {
            expected,
            found: Self::type_name(self.value),
        }
    }

    pub fn get_string_value(&self) -> Result<Option<String>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.mismatch("string")),
        }
    }

    pub fn get_bool_value(&self) -> Result<Option<bool>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    pub fn get_i32_value(&self) -> Result<Option<i32>, ParseError> {
        match self.get_i64_value()? {
            None => Ok(None),
            Some(v) => i32::try_from(v)
                .map(Some)
                .map_err(|_| self.mismatch("32-bit integer")),
        }
    }

    pub fn get_i64_value(&self) -> Result<Option<i64>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| self.mismatch("integer")),
            _ => Err(self.mismatch("integer")),
        }
    }

    pub fn get_f64_value(&self) -> Result<Option<f64>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| self.mismatch("number")),
            _ => Err(self.mismatch("number")),
        }
    }

    pub fn get_uuid_value(&self) -> Result<Option<Uuid>, ParseError> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(s) => Ok(Some(Uuid::parse_str(&s)?)),
        }
    }

    /// RFC 3339 / ISO-8601 timestamp.
    pub fn get_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, ParseError> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(s) => Ok(Some(DateTime::parse_from_rfc3339(&s)?)),
        }
    }

    /// Base64-encoded binary.
    pub fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, ParseError> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(s) => Ok(Some(BASE64.decode(s.as_bytes())?)),
        }
    }

    /// Reads an array of scalars with the supplied per-element reader. Null
    /// elements are skipped.
    pub fn get_collection_of_primitive_values<T>(
        &self,
        read: impl Fn(&ParseNode<'_>) -> Result<Option<T>, ParseError>,
    ) -> Result<Option<Vec<T>>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(v) = read(&ParseNode::new(item))? {
                        out.push(v);
                    }
                }
                Ok(Some(out))
            }
            _ => Err(self.mismatch("array")),
        }
    }

    /// Reads an array of model objects. Null elements are skipped.
    pub fn get_collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(v) = ParseNode::new(item).get_object_value(factory)? {
                        out.push(v);
                    }
                }
                Ok(Some(out))
            }
            _ => Err(self.mismatch("array")),
        }
    }

    /// Constructs a model via `factory`, then feeds it every wire property.
    ///
    /// Properties the model does not recognize are stashed in its
    /// additional-data bag when it exposes one, and silently dropped otherwise.
    pub fn get_object_value<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<T>, ParseError> {
        let entries = match self.value {
            Value::Null => return Ok(None),
            Value::Object(entries) => entries,
            _ => return Err(self.mismatch("object")),
        };
        let mut model = factory(self)?;
        for (name, value) in entries {
            let child = ParseNode::new(value);
            if !model.deserialize_field(name, &child)? {
                if let Some(extra) = model.additional_data_mut() {
                    extra.insert(name.clone(), value.clone());
                }
            }
        }
        Ok(Some(model))
    }

    pub fn get_enum_value<E: WireEnum>(&self) -> Result<Option<E>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => E::parse(s).map(Some).ok_or_else(|| ParseError::UnknownEnumValue {
                enum_name: E::NAME,
                value: s.clone(),
            }),
            _ => Err(self.mismatch("string")),
        }
    }

    /// Child lookup on an object node; `None` when this is not an object or
    /// the property is absent.
    pub fn get_child_node(&self, name: &str) -> Option<ParseNode<'a>> {
        match self.value {
            Value::Object(entries) => entries.get(name).map(ParseNode::new),
            _ => None,
        }
    }

    /// Peeks the `@odata.type` tag without consuming anything.
    pub fn discriminator_value(&self) -> Option<&'a str> {
        match self.value {
            Value::Object(entries) => entries.get(ODATA_TYPE).and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Deserializes one model from an already-parsed document.
pub fn deserialize_from_value<T: Parsable>(
    value: &Value,
    factory: ParsableFactory<T>,
) -> Result<T, ParseError> {
    let node = ParseNode::new(value);
    node.get_object_value(factory)?.ok_or_else(|| node.mismatch("object"))
}

/// Parses raw JSON bytes and deserializes one model from them.
pub fn deserialize_from_slice<T: Parsable>(
    bytes: &[u8],
    factory: ParsableFactory<T>,
) -> Result<T, ParseError> {
    let value: Value = serde_json::from_slice(bytes)?;
    deserialize_from_value(&value, factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_decodes_to_unset_for_every_accessor() {
        let v = Value::Null;
        let node = ParseNode::new(&v);
        assert_eq!(node.get_string_value().unwrap(), None);
        assert_eq!(node.get_bool_value().unwrap(), None);
        assert_eq!(node.get_i32_value().unwrap(), None);
        assert_eq!(node.get_i64_value().unwrap(), None);
        assert_eq!(node.get_f64_value().unwrap(), None);
        assert_eq!(node.get_uuid_value().unwrap(), None);
        assert_eq!(node.get_time_value().unwrap(), None);
        assert_eq!(node.get_byte_array_value().unwrap(), None);
    }

    #[test]
    fn string_accessor_rejects_numbers() {
        let v = json!(42);
        let err = ParseNode::new(&v).get_string_value().unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedType { expected: "string", found: "number" }
        ));
    }

    #[test]
    fn integer_accessor_rejects_fractional_numbers() {
        let v = json!(87.5);
        assert!(ParseNode::new(&v).get_i64_value().is_err());
    }

    #[test]
    fn f64_accessor_accepts_any_json_number() {
        let v = json!(42);
        assert_eq!(ParseNode::new(&v).get_f64_value().unwrap(), Some(42.0));
    }

    #[test]
    fn i32_accessor_rejects_out_of_range_values() {
        let v = json!(i64::from(i32::MAX) + 1);
        assert!(ParseNode::new(&v).get_i32_value().is_err());
    }

    #[test]
    fn time_accessor_parses_rfc3339() {
        let v = json!("2023-01-07T09:30:00Z");
        let parsed = ParseNode::new(&v).get_time_value().unwrap().unwrap();
        assert_eq!(parsed.timestamp(), 1_673_083_800);
    }

    #[test]
    fn time_accessor_rejects_malformed_timestamps() {
        let v = json!("last tuesday");
        assert!(matches!(
            ParseNode::new(&v).get_time_value(),
            Err(ParseError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn byte_array_accessor_decodes_base64() {
        let v = json!("aGVsbG8=");
        assert_eq!(
            ParseNode::new(&v).get_byte_array_value().unwrap(),
            Some(b"hello".to_vec())
        );
    }

    #[test]
    fn byte_array_accessor_rejects_malformed_base64() {
        let v = json!("not base64!");
        assert!(matches!(
            ParseNode::new(&v).get_byte_array_value(),
            Err(ParseError::InvalidBase64(_))
        ));
    }

    #[test]
    fn uuid_accessor_rejects_malformed_uuids() {
        let v = json!("not-a-uuid");
        assert!(matches!(
            ParseNode::new(&v).get_uuid_value(),
            Err(ParseError::InvalidUuid(_))
        ));
    }

    #[test]
    fn primitive_collection_skips_null_elements() {
        let v = json!(["a", null, "b"]);
        let out = ParseNode::new(&v)
            .get_collection_of_primitive_values(|n| n.get_string_value())
            .unwrap()
            .unwrap();
        assert_eq!(out, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn primitive_collection_fails_fast_on_element_mismatch() {
        let v = json!(["a", 1]);
        assert!(ParseNode::new(&v)
            .get_collection_of_primitive_values(|n| n.get_string_value())
            .is_err());
    }

    #[test]
    fn discriminator_value_peeks_the_type_tag() {
        let v = json!({"@odata.type": "#microsoft.graph.meetingRegistration", "subject": "s"});
        assert_eq!(
            ParseNode::new(&v).discriminator_value(),
            Some("#microsoft.graph.meetingRegistration")
        );
        let untagged = json!({"subject": "s"});
        assert_eq!(ParseNode::new(&untagged).discriminator_value(), None);
    }

    #[test]
    fn child_node_lookup() {
        let v = json!({"status": {"errorCode": 0}});
        let node = ParseNode::new(&v);
        assert!(node.get_child_node("status").is_some());
        assert!(node.get_child_node("missing").is_none());
        assert!(ParseNode::new(&json!("scalar")).get_child_node("x").is_none());
    }
}
