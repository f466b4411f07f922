//! Meeting registration family: a polymorphic entity hierarchy dispatched on
//! the `@odata.type` tag.

use chrono::{DateTime, FixedOffset};
use graph_serialization::{
    Parsable, ParseError, ParseNode, SerializationWriter, WireEnum, WriteError,
};

use crate::entity::Entity;

/// Who is allowed to register for a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingAudience {
    Everyone,
    Organization,
    UnknownFutureValue,
}

impl WireEnum for MeetingAudience {
    const NAME: &'static str = "meetingAudience";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Everyone => "everyone",
            Self::Organization => "organization",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "everyone" => Self::Everyone,
            "organization" => Self::Organization,
            _ => Self::UnknownFutureValue,
        })
    }
}

/// Base of the registration hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingRegistrationBase {
    entity: Entity,
    allowed_registrant: Option<MeetingAudience>,
}

impl MeetingRegistrationBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(Self::new())
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn allowed_registrant(&self) -> Option<MeetingAudience> {
        self.allowed_registrant
    }

    pub fn set_allowed_registrant(&mut self, value: Option<MeetingAudience>) {
        self.allowed_registrant = value;
    }
}

impl Parsable for MeetingRegistrationBase {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.entity.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "allowedRegistrant" => self.allowed_registrant = node.get_enum_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.entity.serialize(writer)?;
        writer.write_enum_value("allowedRegistrant", self.allowed_registrant.as_ref());
        Ok(())
    }
}

/// Registration configured directly on an online meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRegistration {
    base: MeetingRegistrationBase,
    description: Option<String>,
    end_date_time: Option<DateTime<FixedOffset>>,
    registration_page_view_count: Option<i32>,
    start_date_time: Option<DateTime<FixedOffset>>,
    subject: Option<String>,
}

impl MeetingRegistration {
    pub fn new() -> Self {
        let mut base = MeetingRegistrationBase::new();
        base.entity_mut()
            .set_odata_type(Some("#microsoft.graph.meetingRegistration".to_string()));
        Self {
            base,
            description: None,
            end_date_time: None,
            registration_page_view_count: None,
            start_date_time: None,
            subject: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(Self::new())
    }

    pub fn base(&self) -> &MeetingRegistrationBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MeetingRegistrationBase {
        &mut self.base
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn end_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.end_date_time.as_ref()
    }

    pub fn set_end_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.end_date_time = value;
    }

    pub fn registration_page_view_count(&self) -> Option<i32> {
        self.registration_page_view_count
    }

    pub fn set_registration_page_view_count(&mut self, value: Option<i32>) {
        self.registration_page_view_count = value;
    }

    pub fn start_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.start_date_time.as_ref()
    }

    pub fn set_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.start_date_time = value;
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn set_subject(&mut self, value: Option<String>) {
        self.subject = value;
    }
}

impl Default for MeetingRegistration {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for MeetingRegistration {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.base.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "description" => self.description = node.get_string_value()?,
            "endDateTime" => self.end_date_time = node.get_time_value()?,
            "registrationPageViewCount" => {
                self.registration_page_view_count = node.get_i32_value()?
            }
            "startDateTime" => self.start_date_time = node.get_time_value()?,
            "subject" => self.subject = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.base.serialize(writer)?;
        writer.write_string_value("description", self.description.as_deref());
        writer.write_time_value("endDateTime", self.end_date_time.as_ref());
        writer.write_i32_value("registrationPageViewCount", self.registration_page_view_count);
        writer.write_time_value("startDateTime", self.start_date_time.as_ref());
        writer.write_string_value("subject", self.subject.as_deref());
        Ok(())
    }
}

/// Registration hosted by an external webinar provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalMeetingRegistration {
    base: MeetingRegistrationBase,
    registration_web_url: Option<String>,
}

impl ExternalMeetingRegistration {
    pub fn new() -> Self {
        let mut base = MeetingRegistrationBase::new();
        base.entity_mut()
            .set_odata_type(Some("#microsoft.graph.externalMeetingRegistration".to_string()));
        Self {
            base,
            registration_web_url: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(Self::new())
    }

    pub fn base(&self) -> &MeetingRegistrationBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MeetingRegistrationBase {
        &mut self.base
    }

    pub fn registration_web_url(&self) -> Option<&str> {
        self.registration_web_url.as_deref()
    }

    pub fn set_registration_web_url(&mut self, value: Option<String>) {
        self.registration_web_url = value;
    }
}

impl Default for ExternalMeetingRegistration {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for ExternalMeetingRegistration {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.base.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "registrationWebUrl" => self.registration_web_url = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.base.serialize(writer)?;
        writer.write_string_value("registrationWebUrl", self.registration_web_url.as_deref());
        Ok(())
    }
}

/// The registration family as one closed sum, resolved from the wire tag.
/// Absent or unrecognized tags fall back to the base shape.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMeetingRegistration {
    Base(MeetingRegistrationBase),
    Registration(MeetingRegistration),
    External(ExternalMeetingRegistration),
}

impl AnyMeetingRegistration {
    pub fn create_from_discriminator_value(node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(match node.discriminator_value() {
            Some("#microsoft.graph.meetingRegistration") => {
                Self::Registration(MeetingRegistration::new())
            }
            Some("#microsoft.graph.externalMeetingRegistration") => {
                Self::External(ExternalMeetingRegistration::new())
            }
            _ => Self::Base(MeetingRegistrationBase::new()),
        })
    }
}

impl Parsable for AnyMeetingRegistration {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match self {
            Self::Base(m) => m.deserialize_field(field, node),
            Self::Registration(m) => m.deserialize_field(field, node),
            Self::External(m) => m.deserialize_field(field, node),
        }
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        match self {
            Self::Base(m) => m.serialize(writer),
            Self::Registration(m) => m.serialize(writer),
            Self::External(m) => m.serialize(writer),
        }
    }
}
