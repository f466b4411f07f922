//! Generic object-graph serialization for Graph-style REST models.
//!
//! Model types implement [`Parsable`] and are driven by a borrowed [`ParseNode`]
//! view over a JSON document on the way in, and a [`SerializationWriter`] on the
//! way out. Polymorphic payloads resolve their concrete shape from the
//! `@odata.type` discriminator before any field is read, and open types keep
//! unrecognized wire properties in an [`AdditionalData`] bag so round-tripping
//! never loses server-added fields.

pub mod error;
pub mod parsable;
pub mod parse_node;
pub mod wire_enum;
pub mod writer;

pub use error::{ParseError, WriteError};
pub use parsable::{AdditionalData, Parsable, ParsableFactory, ODATA_TYPE};
pub use parse_node::{deserialize_from_slice, deserialize_from_value, ParseNode};
pub use wire_enum::WireEnum;
pub use writer::{serialize_to_value, serialize_to_vec, SerializationWriter};
