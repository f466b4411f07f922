//! Mobile app relationship family: dependency and supersedence links between
//! managed apps. The enums here are closed: the service contract declares no
//! `unknownFutureValue` member, so an unmapped string fails the decode.

use graph_serialization::{
    Parsable, ParseError, ParseNode, SerializationWriter, WireEnum, WriteError,
};

use crate::entity::Entity;

/// Direction of the relationship relative to the target app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileAppRelationshipType {
    Child,
    Parent,
}

impl WireEnum for MobileAppRelationshipType {
    const NAME: &'static str = "mobileAppRelationshipType";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Parent => "parent",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "child" => Some(Self::Child),
            "parent" => Some(Self::Parent),
            _ => None,
        }
    }
}

/// How a dependency is enforced at install time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileAppDependencyType {
    Detect,
    AutoInstall,
}

impl WireEnum for MobileAppDependencyType {
    const NAME: &'static str = "mobileAppDependencyType";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Detect => "detect",
            Self::AutoInstall => "autoInstall",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "detect" => Some(Self::Detect),
            "autoInstall" => Some(Self::AutoInstall),
            _ => None,
        }
    }
}

/// Whether a superseding app updates or replaces the superseded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileAppSupersedenceType {
    Update,
    Replace,
}

impl WireEnum for MobileAppSupersedenceType {
    const NAME: &'static str = "mobileAppSupersedenceType";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Replace => "replace",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "update" => Some(Self::Update),
            "replace" => Some(Self::Replace),
            _ => None,
        }
    }
}

/// Base of the relationship hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobileAppRelationship {
    entity: Entity,
    target_display_name: Option<String>,
    target_display_version: Option<String>,
    target_id: Option<String>,
    target_publisher: Option<String>,
    target_type: Option<MobileAppRelationshipType>,
}

impl MobileAppRelationship {
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

    pub fn target_display_name(&self) -> Option<&str> {
        self.target_display_name.as_deref()
    }

    pub fn set_target_display_name(&mut self, value: Option<String>) {
        self.target_display_name = value;
    }

    pub fn target_display_version(&self) -> Option<&str> {
        self.target_display_version.as_deref()
    }

    pub fn set_target_display_version(&mut self, value: Option<String>) {
        self.target_display_version = value;
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    pub fn set_target_id(&mut self, value: Option<String>) {
        self.target_id = value;
    }

    pub fn target_publisher(&self) -> Option<&str> {
        self.target_publisher.as_deref()
    }

    pub fn set_target_publisher(&mut self, value: Option<String>) {
        self.target_publisher = value;
    }

    pub fn target_type(&self) -> Option<MobileAppRelationshipType> {
        self.target_type
    }

    pub fn set_target_type(&mut self, value: Option<MobileAppRelationshipType>) {
        self.target_type = value;
    }
}

impl Parsable for MobileAppRelationship {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.entity.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "targetDisplayName" => self.target_display_name = node.get_string_value()?,
            "targetDisplayVersion" => self.target_display_version = node.get_string_value()?,
            "targetId" => self.target_id = node.get_string_value()?,
            "targetPublisher" => self.target_publisher = node.get_string_value()?,
            "targetType" => self.target_type = node.get_enum_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.entity.serialize(writer)?;
        writer.write_string_value("targetDisplayName", self.target_display_name.as_deref());
        writer.write_string_value("targetDisplayVersion", self.target_display_version.as_deref());
        writer.write_string_value("targetId", self.target_id.as_deref());
        writer.write_string_value("targetPublisher", self.target_publisher.as_deref());
        writer.write_enum_value("targetType", self.target_type.as_ref());
        Ok(())
    }
}

/// The target app must be present for the source app to install.
#[derive(Debug, Clone, PartialEq)]
pub struct MobileAppDependency {
    base: MobileAppRelationship,
    dependency_type: Option<MobileAppDependencyType>,
    dependent_app_count: Option<i32>,
}

impl MobileAppDependency {
    pub fn new() -> Self {
        let mut base = MobileAppRelationship::new();
        base.entity_mut()
            .set_odata_type(Some("#microsoft.graph.mobileAppDependency".to_string()));
        Self {
            base,
            dependency_type: None,
            dependent_app_count: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(Self::new())
    }

    pub fn base(&self) -> &MobileAppRelationship {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MobileAppRelationship {
        &mut self.base
    }

    pub fn dependency_type(&self) -> Option<MobileAppDependencyType> {
        self.dependency_type
    }

    pub fn set_dependency_type(&mut self, value: Option<MobileAppDependencyType>) {
        self.dependency_type = value;
    }

    pub fn dependent_app_count(&self) -> Option<i32> {
        self.dependent_app_count
    }

    pub fn set_dependent_app_count(&mut self, value: Option<i32>) {
        self.dependent_app_count = value;
    }
}

impl Default for MobileAppDependency {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for MobileAppDependency {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.base.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "dependencyType" => self.dependency_type = node.get_enum_value()?,
            "dependentAppCount" => self.dependent_app_count = node.get_i32_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.base.serialize(writer)?;
        writer.write_enum_value("dependencyType", self.dependency_type.as_ref());
        writer.write_i32_value("dependentAppCount", self.dependent_app_count);
        Ok(())
    }
}

/// The source app updates or replaces the target app.
#[derive(Debug, Clone, PartialEq)]
pub struct MobileAppSupersedence {
    base: MobileAppRelationship,
    superseded_app_count: Option<i32>,
    supersedence_type: Option<MobileAppSupersedenceType>,
    superseding_app_count: Option<i32>,
}

impl MobileAppSupersedence {
    pub fn new() -> Self {
        let mut base = MobileAppRelationship::new();
        base.entity_mut()
            .set_odata_type(Some("#microsoft.graph.mobileAppSupersedence".to_string()));
        Self {
            base,
            superseded_app_count: None,
            supersedence_type: None,
            superseding_app_count: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(Self::new())
    }

    pub fn base(&self) -> &MobileAppRelationship {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MobileAppRelationship {
        &mut self.base
    }

    pub fn superseded_app_count(&self) -> Option<i32> {
        self.superseded_app_count
    }

    pub fn set_superseded_app_count(&mut self, value: Option<i32>) {
        self.superseded_app_count = value;
    }

    pub fn supersedence_type(&self) -> Option<MobileAppSupersedenceType> {
        self.supersedence_type
    }

    pub fn set_supersedence_type(&mut self, value: Option<MobileAppSupersedenceType>) {
        self.supersedence_type = value;
    }

    pub fn superseding_app_count(&self) -> Option<i32> {
        self.superseding_app_count
    }

    pub fn set_superseding_app_count(&mut self, value: Option<i32>) {
        self.superseding_app_count = value;
    }
}

impl Default for MobileAppSupersedence {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for MobileAppSupersedence {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        if self.base.deserialize_field(field, node)? {
            return Ok(true);
        }
        match field {
            "supersededAppCount" => self.superseded_app_count = node.get_i32_value()?,
            "supersedenceType" => self.supersedence_type = node.get_enum_value()?,
            "supersedingAppCount" => self.superseding_app_count = node.get_i32_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        self.base.serialize(writer)?;
        writer.write_i32_value("supersededAppCount", self.superseded_app_count);
        writer.write_enum_value("supersedenceType", self.supersedence_type.as_ref());
        writer.write_i32_value("supersedingAppCount", self.superseding_app_count);
        Ok(())
    }
}

/// The relationship family as one closed sum, resolved from the wire tag.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMobileAppRelationship {
    Base(MobileAppRelationship),
    Dependency(MobileAppDependency),
    Supersedence(MobileAppSupersedence),
}

impl AnyMobileAppRelationship {
    pub fn create_from_discriminator_value(node: &ParseNode<'_>) -> Result<Self, ParseError> {
        Ok(match node.discriminator_value() {
            Some("#microsoft.graph.mobileAppDependency") => {
                Self::Dependency(MobileAppDependency::new())
            }
            Some("#microsoft.graph.mobileAppSupersedence") => {
                Self::Supersedence(MobileAppSupersedence::new())
            }
            _ => Self::Base(MobileAppRelationship::new()),
        })
    }
}

impl Parsable for AnyMobileAppRelationship {
    fn deserialize_field(&mut self, field: &str, node: &ParseNode<'_>) -> Result<bool, ParseError> {
        match self {
            Self::Base(m) => m.deserialize_field(field, node),
            Self::Dependency(m) => m.deserialize_field(field, node),
            Self::Supersedence(m) => m.deserialize_field(field, node),
        }
    }

    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), WriteError> {
        match self {
            Self::Base(m) => m.serialize(writer),
            Self::Dependency(m) => m.serialize(writer),
            Self::Supersedence(m) => m.serialize(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_type_string_codec_is_bijective() {
        let members = [
            MobileAppRelationshipType::Child,
            MobileAppRelationshipType::Parent,
        ];
        for m in members {
            assert_eq!(MobileAppRelationshipType::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn dependency_type_string_codec_is_bijective() {
        let members = [
            MobileAppDependencyType::Detect,
            MobileAppDependencyType::AutoInstall,
        ];
        for m in members {
            assert_eq!(MobileAppDependencyType::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn supersedence_type_string_codec_is_bijective() {
        let members = [
            MobileAppSupersedenceType::Update,
            MobileAppSupersedenceType::Replace,
        ];
        for m in members {
            assert_eq!(MobileAppSupersedenceType::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn unmapped_strings_are_rejected_without_a_catch_all() {
        assert_eq!(MobileAppRelationshipType::parse("sibling"), None);
        assert_eq!(MobileAppDependencyType::parse("require"), None);
        assert_eq!(MobileAppSupersedenceType::parse("retire"), None);
    }
}
