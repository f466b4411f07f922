//! Common base for identity-bearing types.

use graph_serialization::{
    Parsable, ParseError, ParseNode, SerializationWriter, WriteError, ODATA_TYPE,
};

/// Base of every identity-bearing model: the server-assigned identifier plus
/// the `@odata.type` tag. Entity types are closed; unrecognized wire
/// properties are dropped, not preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    id: Option<String>,
    odata_type: Option<String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(Self::new())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

impl Parsable for Entity {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match field {
            "id" => self.id = node.get_string_value()?,
            ODATA_TYPE => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        writer.write_string_value("id", self.id.as_deref());
        writer.write_string_value(ODATA_TYPE, self.odata_type.as_deref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_serialization::deserialize_from_value;
    use serde_json::json;

    #[test]
    fn unknown_properties_on_entities_are_dropped() {
        let doc = json!({"id": "42", "serverAdded": true});
        let entity =
            deserialize_from_value(&doc, Entity::create_from_discriminator_value).unwrap();
        assert_eq!(entity.id(), Some("42"));
        let out = graph_serialization::serialize_to_value(&entity).unwrap();
        assert_eq!(out, json!({"id": "42"}));
    }

    #[test]
    fn type_tag_round_trips_through_the_typed_field() {
        let doc = json!({"id": "1", "@odata.type": "#microsoft.graph.entity"});
        let entity =
            deserialize_from_value(&doc, Entity::create_from_discriminator_value).unwrap();
        assert_eq!(entity.odata_type(), Some("#microsoft.graph.entity"));
    }
}
