//! Mobile app troubleshooting history: a polymorphic hierarchy over an open
//! complex base. Subtypes inherit the unknown-field bag from the base, so the
//! whole family round-trips server-added properties.

use chrono::{DateTime, FixedOffset};
use graph_serialization::{
    AdditionalData, Parsable, ParseError, ParseNode, SerializationWriter, WireEnum, WriteError,
    ODATA_TYPE,
};

/// Outcome of one execution of a troubleshooting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Unknown,
    Success,
    Fail,
}

impl WireEnum for RunState {
    const NAME: &'static str = "runState";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "unknown" => Some(Self::Unknown),
            "success" => Some(Self::Success),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

/// Base history item. Open type; carries the type tag so subtypes stay
/// distinguishable after a round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobileAppTroubleshootingHistoryItem {
    additional_data: AdditionalData,
    occurrence_date_time: Option<DateTime<FixedOffset>>,
    odata_type: Option<String>,
}

impl MobileAppTroubleshootingHistoryItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(Self::new())
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn set_additional_data(&mut self, value: AdditionalData) {
        self.additional_data = value;
    }

    pub fn occurrence_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.occurrence_date_time.as_ref()
    }

    pub fn set_occurrence_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.occurrence_date_time = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

impl Parsable for MobileAppTroubleshootingHistoryItem {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match field {
            "occurrenceDateTime" => self.occurrence_date_time = node.get_time_value()?,
            ODATA_TYPE => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        writer.write_time_value("occurrenceDateTime", self.occurrence_date_time.as_ref());
        writer.write_string_value(ODATA_TYPE, self.odata_type.as_deref());
        writer.write_additional_data(&self.additional_data);
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// History item recording an app state change during troubleshooting.
#[derive(Debug, Clone, PartialEq)]
pub struct MobileAppTroubleshootingAppStateHistory {
    base: MobileAppTroubleshootingHistoryItem,
    error_code: Option<String>,
    run_state: Option<RunState>,
}

impl MobileAppTroubleshootingAppStateHistory {
    pub fn new() -> Self {
        let mut base = MobileAppTroubleshootingHistoryItem::new();
        base.set_odata_type(Some(
            "#microsoft.graph.mobileAppTroubleshootingAppStateHistory".to_string(),
        ));
        Self {
            base,
            error_code: None,
            run_state: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(Self::new())
    }

    pub fn base(&self) -> &MobileAppTroubleshootingHistoryItem {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MobileAppTroubleshootingHistoryItem {
        &mut self.base
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn set_error_code(&mut self, value: Option<String>) {
        self.error_code = value;
    }

    pub fn run_state(&self) -> Option<RunState> {
        self.run_state
    }

    pub fn set_run_state(&mut self, value: Option<RunState>) {
        self.run_state = value;
    }
}

impl Default for MobileAppTroubleshootingAppStateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for MobileAppTroubleshootingAppStateHistory {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.base.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "errorCode" => self.error_code = node.get_string_value()?,
            "runState" => self.run_state = node.get_enum_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.base.serialize(writer)?;
        writer.write_string_value("errorCode", self.error_code.as_deref());
        writer.write_enum_value("runState", self.run_state.as_ref());
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.base.additional_data_mut()
    }
}

/// The history-item family as one closed sum, resolved from the wire tag.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMobileAppTroubleshootingHistoryItem {
    Base(MobileAppTroubleshootingHistoryItem),
    AppStateHistory(MobileAppTroubleshootingAppStateHistory),
}

impl AnyMobileAppTroubleshootingHistoryItem {
    pub fn create_from_discriminator_value(node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(match node.discriminator_value() {
            Some("#microsoft.graph.mobileAppTroubleshootingAppStateHistory") => {
                Self::AppStateHistory(MobileAppTroubleshootingAppStateHistory::new())
            }
            _ => Self::Base(MobileAppTroubleshootingHistoryItem::new()),
        })
    }
}

impl Parsable for AnyMobileAppTroubleshootingHistoryItem {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match self {
            Self::Base(m) => m.deserialize_field(field, node),
            Self::AppStateHistory(m) => m.deserialize_field(field, node),
        }
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        match self {
            Self::Base(m) => m.serialize(writer),
            Self::AppStateHistory(m) => m.serialize(writer),
        }
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        match self {
            Self::Base(m) => m.additional_data_mut(),
            Self::AppStateHistory(m) => m.additional_data_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_state_string_codec_is_bijective() {
        let members = [RunState::Unknown, RunState::Success, RunState::Fail];
        for m in members {
            assert_eq!(RunState::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn unmapped_run_states_are_rejected() {
        assert_eq!(RunState::parse("pending"), None);
    }
}
