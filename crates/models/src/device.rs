//! Device-bound credential details. Both types are open.

use graph_serialization::{
    AdditionalData, Parsable, ParseError, ParseNode, SerializationWriter, WriteError,
};
use uuid::Uuid;

/// Details of the app and device used during an authentication method
/// registration or reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthenticationAppDeviceDetails {
    additional_data: AdditionalData,
    app_version: Option<String>,
    client_app: Option<String>,
    device_id: Option<String>,
    operating_system: Option<String>,
}

impl AuthenticationAppDeviceDetails {
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

    pub fn app_version(&self) -> Option<&str> {
        self.app_version.as_deref()
    }

    pub fn set_app_version(&mut self, value: Option<String>) {
        self.app_version = value;
    }

    pub fn client_app(&self) -> Option<&str> {
        self.client_app.as_deref()
    }

    pub fn set_client_app(&mut self, value: Option<String>) {
        self.client_app = value;
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn set_device_id(&mut self, value: Option<String>) {
        self.device_id = value;
    }

    pub fn operating_system(&self) -> Option<&str> {
        self.operating_system.as_deref()
    }

    pub fn set_operating_system(&mut self, value: Option<String>) {
        self.operating_system = value;
    }
}

impl Parsable for AuthenticationAppDeviceDetails {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match field {
            "appVersion" => self.app_version = node.get_string_value()?,
            "clientApp" => self.client_app = node.get_string_value()?,
            "deviceId" => self.device_id = node.get_string_value()?,
            "operatingSystem" => self.operating_system = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        writer.write_string_value("appVersion", self.app_version.as_deref());
        writer.write_string_value("clientApp", self.client_app.as_deref());
        writer.write_string_value("deviceId", self.device_id.as_deref());
        writer.write_string_value("operatingSystem", self.operating_system.as_deref());
        writer.write_additional_data(&self.additional_data);
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Cryptographic key registered to a device. `keyMaterial` is base64 on the
/// wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceKey {
    additional_data: AdditionalData,
    device_id: Option<Uuid>,
    key_material: Option<Vec<u8>>,
    key_type: Option<String>,
}

impl DeviceKey {
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

    pub fn device_id(&self) -> Option<&Uuid> {
        self.device_id.as_ref()
    }

    pub fn set_device_id(&mut self, value: Option<Uuid>) {
        self.device_id = value;
    }

    pub fn key_material(&self) -> Option<&[u8]> {
        self.key_material.as_deref()
    }

    pub fn set_key_material(&mut self, value: Option<Vec<u8>>) {
        self.key_material = value;
    }

    pub fn key_type(&self) -> Option<&str> {
        self.key_type.as_deref()
    }

    pub fn set_key_type(&mut self, value: Option<String>) {
        self.key_type = value;
    }
}

impl Parsable for DeviceKey {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match field {
            "deviceId" => self.device_id = node.get_uuid_value()?,
            "keyMaterial" => self.key_material = node.get_byte_array_value()?,
            "keyType" => self.key_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        writer.write_uuid_value("deviceId", self.device_id.as_ref());
        writer.write_byte_array_value("keyMaterial", self.key_material.as_deref());
        writer.write_string_value("keyType", self.key_type.as_deref());
        writer.write_additional_data(&self.additional_data);
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}
