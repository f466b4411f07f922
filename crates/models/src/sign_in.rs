//! Sign-in activity: the `signIn` entity and the open complex types hanging
//! off it. The complex types preserve unrecognized wire properties; the
//! entity does not.

use chrono::{DateTime, FixedOffset};
use graph_serialization::{
    AdditionalData, Parsable, ParseError, ParseNode, SerializationWriter, WriteError,
};

use crate::entity::Entity;
use crate::risk::{RiskDetail, RiskLevel, RiskState};

/// Authentication outcome of a sign-in attempt. Open type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInStatus {
    additional_data: AdditionalData,
    additional_details: Option<String>,
    error_code: Option<i32>,
    failure_reason: Option<String>,
}

impl SignInStatus {
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

    pub fn additional_details(&self) -> Option<&str> {
        self.additional_details.as_deref()
    }

    pub fn set_additional_details(&mut self, value: Option<String>) {
        self.additional_details = value;
    }

    /// Provider error code; 0 means success.
    pub fn error_code(&self) -> Option<i32> {
        self.error_code
    }

    pub fn set_error_code(&mut self, value: Option<i32>) {
        self.error_code = value;
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn set_failure_reason(&mut self, value: Option<String>) {
        self.failure_reason = value;
    }
}

impl Parsable for SignInStatus {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match field {
            "additionalDetails" => self.additional_details = node.get_string_value()?,
            "errorCode" => self.error_code = node.get_i32_value()?,
            "failureReason" => self.failure_reason = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        writer.write_string_value("additionalDetails", self.additional_details.as_deref());
        writer.write_i32_value("errorCode", self.error_code);
        writer.write_string_value("failureReason", self.failure_reason.as_deref());
        writer.write_additional_data(&self.additional_data);
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Physical coordinates attached to a sign-in location. Open type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoCoordinates {
    additional_data: AdditionalData,
    altitude: Option<f64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl GeoCoordinates {
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

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    pub fn set_altitude(&mut self, value: Option<f64>) {
        self.altitude = value;
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn set_latitude(&mut self, value: Option<f64>) {
        self.latitude = value;
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn set_longitude(&mut self, value: Option<f64>) {
        self.longitude = value;
    }
}

impl Parsable for GeoCoordinates {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match field {
            "altitude" => self.altitude = node.get_f64_value()?,
            "latitude" => self.latitude = node.get_f64_value()?,
            "longitude" => self.longitude = node.get_f64_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        writer.write_f64_value("altitude", self.altitude)?;
        writer.write_f64_value("latitude", self.latitude)?;
        writer.write_f64_value("longitude", self.longitude)?;
        writer.write_additional_data(&self.additional_data);
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Where a sign-in originated from. Open type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInLocation {
    additional_data: AdditionalData,
    city: Option<String>,
    country_or_region: Option<String>,
    geo_coordinates: Option<GeoCoordinates>,
    state: Option<String>,
}

impl SignInLocation {
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

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn set_city(&mut self, value: Option<String>) {
        self.city = value;
    }

    pub fn country_or_region(&self) -> Option<&str> {
        self.country_or_region.as_deref()
    }

    pub fn set_country_or_region(&mut self, value: Option<String>) {
        self.country_or_region = value;
    }

    pub fn geo_coordinates(&self) -> Option<&GeoCoordinates> {
        self.geo_coordinates.as_ref()
    }

    pub fn set_geo_coordinates(&mut self, value: Option<GeoCoordinates>) {
        self.geo_coordinates = value;
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn set_state(&mut self, value: Option<String>) {
        self.state = value;
    }
}

impl Parsable for SignInLocation {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match field {
            "city" => self.city = node.get_string_value()?,
            "countryOrRegion" => self.country_or_region = node.get_string_value()?,
            "geoCoordinates" => {
                self.geo_coordinates =
                    node.get_object_value(GeoCoordinates::create_from_discriminator_value)?
            }
            "state" => self.state = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        writer.write_string_value("city", self.city.as_deref());
        writer.write_string_value("countryOrRegion", self.country_or_region.as_deref());
        writer.write_object_value("geoCoordinates", self.geo_coordinates.as_ref())?;
        writer.write_string_value("state", self.state.as_deref());
        writer.write_additional_data(&self.additional_data);
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Device posture reported for a sign-in. Open type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceDetail {
    additional_data: AdditionalData,
    browser: Option<String>,
    device_id: Option<String>,
    display_name: Option<String>,
    is_compliant: Option<bool>,
    is_managed: Option<bool>,
    operating_system: Option<String>,
    trust_type: Option<String>,
}

impl DeviceDetail {
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

    pub fn browser(&self) -> Option<&str> {
        self.browser.as_deref()
    }

    pub fn set_browser(&mut self, value: Option<String>) {
        self.browser = value;
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn set_device_id(&mut self, value: Option<String>) {
        self.device_id = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn is_compliant(&self) -> Option<bool> {
        self.is_compliant
    }

    pub fn set_is_compliant(&mut self, value: Option<bool>) {
        self.is_compliant = value;
    }

    pub fn is_managed(&self) -> Option<bool> {
        self.is_managed
    }

    pub fn set_is_managed(&mut self, value: Option<bool>) {
        self.is_managed = value;
    }

    pub fn operating_system(&self) -> Option<&str> {
        self.operating_system.as_deref()
    }

    pub fn set_operating_system(&mut self, value: Option<String>) {
        self.operating_system = value;
    }

    pub fn trust_type(&self) -> Option<&str> {
        self.trust_type.as_deref()
    }

    pub fn set_trust_type(&mut self, value: Option<String>) {
        self.trust_type = value;
    }
}

impl Parsable for DeviceDetail {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match field {
            "browser" => self.browser = node.get_string_value()?,
            "deviceId" => self.device_id = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "isCompliant" => self.is_compliant = node.get_bool_value()?,
            "isManaged" => self.is_managed = node.get_bool_value()?,
            "operatingSystem" => self.operating_system = node.get_string_value()?,
            "trustType" => self.trust_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        writer.write_string_value("browser", self.browser.as_deref());
        writer.write_string_value("deviceId", self.device_id.as_deref());
        writer.write_string_value("displayName", self.display_name.as_deref());
        writer.write_bool_value("isCompliant", self.is_compliant);
        writer.write_bool_value("isManaged", self.is_managed);
        writer.write_string_value("operatingSystem", self.operating_system.as_deref());
        writer.write_string_value("trustType", self.trust_type.as_deref());
        writer.write_additional_data(&self.additional_data);
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// One sign-in event from the activity report. Entity type.
///
/// `riskEventTypes_v2` keeps its documented wire name, versioning suffix
/// included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignIn {
    entity: Entity,
    app_display_name: Option<String>,
    app_id: Option<String>,
    client_app_used: Option<String>,
    correlation_id: Option<String>,
    created_date_time: Option<DateTime<FixedOffset>>,
    device_detail: Option<DeviceDetail>,
    ip_address: Option<String>,
    is_interactive: Option<bool>,
    location: Option<SignInLocation>,
    resource_display_name: Option<String>,
    resource_id: Option<String>,
    risk_detail: Option<RiskDetail>,
    risk_event_types_v2: Option<Vec<String>>,
    risk_level_aggregated: Option<RiskLevel>,
    risk_level_during_sign_in: Option<RiskLevel>,
    risk_state: Option<RiskState>,
    status: Option<SignInStatus>,
    user_display_name: Option<String>,
    user_id: Option<String>,
    user_principal_name: Option<String>,
}

impl SignIn {
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

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn set_app_id(&mut self, value: Option<String>) {
        self.app_id = value;
    }

    pub fn client_app_used(&self) -> Option<&str> {
        self.client_app_used.as_deref()
    }

    pub fn set_client_app_used(&mut self, value: Option<String>) {
        self.client_app_used = value;
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn set_correlation_id(&mut self, value: Option<String>) {
        self.correlation_id = value;
    }

    pub fn created_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.created_date_time.as_ref()
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    pub fn device_detail(&self) -> Option<&DeviceDetail> {
        self.device_detail.as_ref()
    }

    pub fn set_device_detail(&mut self, value: Option<DeviceDetail>) {
        self.device_detail = value;
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn set_ip_address(&mut self, value: Option<String>) {
        self.ip_address = value;
    }

    pub fn is_interactive(&self) -> Option<bool> {
        self.is_interactive
    }

    pub fn set_is_interactive(&mut self, value: Option<bool>) {
        self.is_interactive = value;
    }

    pub fn location(&self) -> Option<&SignInLocation> {
        self.location.as_ref()
    }

    pub fn set_location(&mut self, value: Option<SignInLocation>) {
        self.location = value;
    }

    pub fn resource_display_name(&self) -> Option<&str> {
        self.resource_display_name.as_deref()
    }

    pub fn set_resource_display_name(&mut self, value: Option<String>) {
        self.resource_display_name = value;
    }

    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    pub fn set_resource_id(&mut self, value: Option<String>) {
        self.resource_id = value;
    }

    pub fn risk_detail(&self) -> Option<RiskDetail> {
        self.risk_detail
    }

    pub fn set_risk_detail(&mut self, value: Option<RiskDetail>) {
        self.risk_detail = value;
    }

    pub fn risk_event_types_v2(&self) -> Option<&[String]> {
        self.risk_event_types_v2.as_deref()
    }

    pub fn set_risk_event_types_v2(&mut self, value: Option<Vec<String>>) {
        self.risk_event_types_v2 = value;
    }

    pub fn risk_level_aggregated(&self) -> Option<RiskLevel> {
        self.risk_level_aggregated
    }

    pub fn set_risk_level_aggregated(&mut self, value: Option<RiskLevel>) {
        self.risk_level_aggregated = value;
    }

    pub fn risk_level_during_sign_in(&self) -> Option<RiskLevel> {
        self.risk_level_during_sign_in
    }

    pub fn set_risk_level_during_sign_in(&mut self, value: Option<RiskLevel>) {
        self.risk_level_during_sign_in = value;
    }

    pub fn risk_state(&self) -> Option<RiskState> {
        self.risk_state
    }

    pub fn set_risk_state(&mut self, value: Option<RiskState>) {
        self.risk_state = value;
    }

    pub fn status(&self) -> Option<&SignInStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, value: Option<SignInStatus>) {
        self.status = value;
    }

    pub fn user_display_name(&self) -> Option<&str> {
        self.user_display_name.as_deref()
    }

    pub fn set_user_display_name(&mut self, value: Option<String>) {
        self.user_display_name = value;
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn set_user_id(&mut self, value: Option<String>) {
        self.user_id = value;
    }

    pub fn user_principal_name(&self) -> Option<&str> {
        self.user_principal_name.as_deref()
    }

    pub fn set_user_principal_name(&mut self, value: Option<String>) {
        self.user_principal_name = value;
    }
}

impl Parsable for SignIn {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.entity.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "appDisplayName" => self.app_display_name = node.get_string_value()?,
            "appId" => self.app_id = node.get_string_value()?,
            "clientAppUsed" => self.client_app_used = node.get_string_value()?,
            "correlationId" => self.correlation_id = node.get_string_value()?,
            "createdDateTime" => self.created_date_time = node.get_time_value()?,
            "deviceDetail" => {
                self.device_detail =
                    node.get_object_value(DeviceDetail::create_from_discriminator_value)?
            }
            "ipAddress" => self.ip_address = node.get_string_value()?,
            "isInteractive" => self.is_interactive = node.get_bool_value()?,
            "location" => {
                self.location =
                    node.get_object_value(SignInLocation::create_from_discriminator_value)?
            }
            "resourceDisplayName" => self.resource_display_name = node.get_string_value()?,
            "resourceId" => self.resource_id = node.get_string_value()?,
            "riskDetail" => self.risk_detail = node.get_enum_value()?,
            "riskEventTypes_v2" => {
                self.risk_event_types_v2 =
                    node.get_collection_of_primitive_values(|n| n.get_string_value())?
            }
            "riskLevelAggregated" => self.risk_level_aggregated = node.get_enum_value()?,
            "riskLevelDuringSignIn" => self.risk_level_during_sign_in = node.get_enum_value()?,
            "riskState" => self.risk_state = node.get_enum_value()?,
            "status" => {
                self.status = node.get_object_value(SignInStatus::create_from_discriminator_value)?
            }
            "userDisplayName" => self.user_display_name = node.get_string_value()?,
            "userId" => self.user_id = node.get_string_value()?,
            "userPrincipalName" => self.user_principal_name = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.entity.serialize(writer)?;
        writer.write_string_value("appDisplayName", self.app_display_name.as_deref());
        writer.write_string_value("appId", self.app_id.as_deref());
        writer.write_string_value("clientAppUsed", self.client_app_used.as_deref());
        writer.write_string_value("correlationId", self.correlation_id.as_deref());
        writer.write_time_value("createdDateTime", self.created_date_time.as_ref());
        writer.write_object_value("deviceDetail", self.device_detail.as_ref())?;
        writer.write_string_value("ipAddress", self.ip_address.as_deref());
        writer.write_bool_value("isInteractive", self.is_interactive);
        writer.write_object_value("location", self.location.as_ref())?;
        writer.write_string_value("resourceDisplayName", self.resource_display_name.as_deref());
        writer.write_string_value("resourceId", self.resource_id.as_deref());
        writer.write_enum_value("riskDetail", self.risk_detail.as_ref());
        writer.write_collection_of_string_values(
            "riskEventTypes_v2",
            self.risk_event_types_v2.as_deref(),
        );
        writer.write_enum_value("riskLevelAggregated", self.risk_level_aggregated.as_ref());
        writer.write_enum_value("riskLevelDuringSignIn", self.risk_level_during_sign_in.as_ref());
        writer.write_enum_value("riskState", self.risk_state.as_ref());
        writer.write_object_value("status", self.status.as_ref())?;
        writer.write_string_value("userDisplayName", self.user_display_name.as_deref());
        writer.write_string_value("userId", self.user_id.as_deref());
        writer.write_string_value("userPrincipalName", self.user_principal_name.as_deref());
        Ok(())
    }
}
