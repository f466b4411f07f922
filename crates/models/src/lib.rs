//! Data models for the Graph beta REST surface.
//!
//! Every type follows the same mechanical contract: optional fields with pure
//! accessors, a `create_from_discriminator_value` factory, field-driven decode
//! delegating to the embedded base first, and base-first serialization. Open
//! complex types additionally preserve unrecognized wire properties; entity
//! types silently drop them. Polymorphic families are closed sum types
//! dispatched on the `@odata.type` tag.

pub mod device;
pub mod entity;
pub mod meeting_registration;
pub mod mobile_app_relationship;
pub mod mobile_app_troubleshooting;
pub mod risk;
pub mod sign_in;
pub mod sign_in_reports;

pub use device::{AuthenticationAppDeviceDetails, DeviceKey};
pub use entity::Entity;
pub use meeting_registration::{
    AnyMeetingRegistration, ExternalMeetingRegistration, MeetingAudience, MeetingRegistration,
    MeetingRegistrationBase,
};
pub use mobile_app_relationship::{
    AnyMobileAppRelationship, MobileAppDependency, MobileAppDependencyType,
    MobileAppRelationship, MobileAppRelationshipType, MobileAppSupersedence,
    MobileAppSupersedenceType,
};
pub use mobile_app_troubleshooting::{
    AnyMobileAppTroubleshootingHistoryItem, MobileAppTroubleshootingAppStateHistory,
    MobileAppTroubleshootingHistoryItem, RunState,
};
pub use risk::{RiskDetail, RiskLevel, RiskState};
pub use sign_in::{DeviceDetail, GeoCoordinates, SignIn, SignInLocation, SignInStatus};
pub use sign_in_reports::{ApplicationSignInDetailedSummary, ApplicationSignInSummary};
