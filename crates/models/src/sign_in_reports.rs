//! Aggregated sign-in activity report entities.

use chrono::{DateTime, FixedOffset};
use graph_serialization::{
    Parsable, ParseError, ParseNode, SerializationWriter, WriteError,
};

use crate::entity::Entity;
use crate::sign_in::SignInStatus;

/// Per-application success/failure totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationSignInSummary {
    entity: Entity,
    app_display_name: Option<String>,
    failed_sign_in_count: Option<i64>,
    success_percentage: Option<f64>,
    successful_sign_in_count: Option<i64>,
}

impl ApplicationSignInSummary {
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

    pub fn app_display_name(&self) -> Option<&str> {
        self.app_display_name.as_deref()
    }

    pub fn set_app_display_name(&mut self, value: Option<String>) {
        self.app_display_name = value;
    }

    pub fn failed_sign_in_count(&self) -> Option<i64> {
        self.failed_sign_in_count
    }

    pub fn set_failed_sign_in_count(&mut self, value: Option<i64>) {
        self.failed_sign_in_count = value;
    }

    pub fn success_percentage(&self) -> Option<f64> {
        self.success_percentage
    }

    pub fn set_success_percentage(&mut self, value: Option<f64>) {
        self.success_percentage = value;
    }

    pub fn successful_sign_in_count(&self) -> Option<i64> {
        self.successful_sign_in_count
    }

    pub fn set_successful_sign_in_count(&mut self, value: Option<i64>) {
        self.successful_sign_in_count = value;
    }
}

impl Parsable for ApplicationSignInSummary {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.entity.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "appDisplayName" => self.app_display_name = node.get_string_value()?,
            "failedSignInCount" => self.failed_sign_in_count = node.get_i64_value()?,
            "successPercentage" => self.success_percentage = node.get_f64_value()?,
            "successfulSignInCount" => self.successful_sign_in_count = node.get_i64_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.entity.serialize(writer)?;
        writer.write_string_value("appDisplayName", self.app_display_name.as_deref());
        writer.write_i64_value("failedSignInCount", self.failed_sign_in_count);
        writer.write_f64_value("successPercentage", self.success_percentage)?;
        writer.write_i64_value("successfulSignInCount", self.successful_sign_in_count);
        Ok(())
    }
}

/// Per-application sign-in totals aggregated over one reporting window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationSignInDetailedSummary {
    entity: Entity,
    aggregated_event_date_time: Option<DateTime<FixedOffset>>,
    app_display_name: Option<String>,
    app_id: Option<String>,
    sign_in_count: Option<i64>,
    status: Option<SignInStatus>,
}

impl ApplicationSignInDetailedSummary {
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

    pub fn aggregated_event_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.aggregated_event_date_time.as_ref()
    }

    pub fn set_aggregated_event_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.aggregated_event_date_time = value;
    }

    pub fn app_display_name(&self) -> Option<&str> {
        self.app_display_name.as_deref()
    }

    pub fn set_app_display_name(&mut self, value: Option<String>) {
        self.app_display_name = value;
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn set_app_id(&mut self, value: Option<String>) {
        self.app_id = value;
    }

    pub fn sign_in_count(&self) -> Option<i64> {
        self.sign_in_count
    }

    pub fn set_sign_in_count(&mut self, value: Option<i64>) {
        self.sign_in_count = value;
    }

    pub fn status(&self) -> Option<&SignInStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, value: Option<SignInStatus>) {
        self.status = value;
    }
}

impl Parsable for ApplicationSignInDetailedSummary {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.entity.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "aggregatedEventDateTime" => {
                self.aggregated_event_date_time = node.get_time_value()?
            }
            "appDisplayName" => self.app_display_name = node.get_string_value()?,
            "appId" => self.app_id = node.get_string_value()?,
            "signInCount" => self.sign_in_count = node.get_i64_value()?,
            "status" => {
                self.status = node.get_object_value(SignInStatus::create_from_discriminator_value)?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.entity.serialize(writer)?;
        writer.write_time_value(
            "aggregatedEventDateTime",
            self.aggregated_event_date_time.as_ref(),
        );
        writer.write_string_value("appDisplayName", self.app_display_name.as_deref());
        writer.write_string_value("appId", self.app_id.as_deref());
        writer.write_i64_value("signInCount", self.sign_in_count);
        writer.write_object_value("status", self.status.as_ref())?;
        Ok(())
    }
}
