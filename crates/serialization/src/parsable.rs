//! The model-side contract: field-driven decode, base-first encode, and the
//! unknown-field bag for open types.

use serde_json::Value;

use crate::error::{ParseError, WriteError};
use crate::parse_node::ParseNode;
use crate::writer::SerializationWriter;

/// Wire property carrying the concrete type tag for polymorphic payloads,
/// with values shaped `#microsoft.graph.<typeName>`.
pub const ODATA_TYPE: &str = "@odata.type";

/// Unrecognized wire properties preserved verbatim for round-tripping, in
/// wire order.
pub type AdditionalData = serde_json::Map<String, Value>;

/// Implemented by every model type.
///
/// Composed types delegate both methods to their embedded base first: inherited
/// fields are always recognized before own fields during decode, and precede
/// own fields on the wire during encode.
pub trait Parsable {
    /// Stores `node` into the field named `field`, returning `Ok(false)` when
    /// the name is not a declared field of this type.
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError>;

    /// Writes every declared field. Unset fields are passed to the writer as
    /// `None` and omitted from the output; the first write failure
    /// short-circuits.
    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError>;

    /// Open types expose their unknown-field bag here; closed types keep the
    /// default and silently drop unrecognized properties.
    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        None
    }
}

/// Constructor invoked with the node about to be deserialized, so polymorphic
/// families can peek the discriminator before any field is read.
pub type ParsableFactory<T> = fn(&ParseNode<'_>) -> Result<T, ParseError>;
