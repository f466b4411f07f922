use graph_beta_models::{
    AnyMeetingRegistration, AnyMobileAppRelationship, AnyMobileAppTroubleshootingHistoryItem,
    MeetingAudience, MobileAppDependencyType, MobileAppRelationshipType, RunState,
};
use graph_serialization::{deserialize_from_value, serialize_to_value, ParseError};
use serde_json::json;

#[test]
fn registered_tag_constructs_the_concrete_variant() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.meetingRegistration",
        "id": "reg-1",
        "allowedRegistrant": "organization",
        "subject": "Quarterly review",
        "registrationPageViewCount": 12
    });

    let reg = deserialize_from_value(
        &doc,
        AnyMeetingRegistration::create_from_discriminator_value,
    )
    .unwrap();

    match &reg {
        AnyMeetingRegistration::Registration(r) => {
            assert_eq!(r.base().entity().id(), Some("reg-1"));
            assert_eq!(r.base().allowed_registrant(), Some(MeetingAudience::Organization));
            assert_eq!(r.subject(), Some("Quarterly review"));
            assert_eq!(r.registration_page_view_count(), Some(12));
        }
        other => panic!("expected the meetingRegistration variant, got {other:?}"),
    }
}

#[test]
fn external_tag_constructs_the_external_variant() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.externalMeetingRegistration",
        "registrationWebUrl": "https://webinars.example/42"
    });

    let reg = deserialize_from_value(
        &doc,
        AnyMeetingRegistration::create_from_discriminator_value,
    )
    .unwrap();

    match reg {
        AnyMeetingRegistration::External(r) => {
            assert_eq!(r.registration_web_url(), Some("https://webinars.example/42"));
        }
        other => panic!("expected the externalMeetingRegistration variant, got {other:?}"),
    }
}

#[test]
fn absent_or_unrecognized_tag_falls_back_to_the_base() {
    let untagged = json!({"allowedRegistrant": "everyone"});
    let reg = deserialize_from_value(
        &untagged,
        AnyMeetingRegistration::create_from_discriminator_value,
    )
    .unwrap();
    assert!(matches!(reg, AnyMeetingRegistration::Base(_)));

    let unrecognized = json!({
        "@odata.type": "#microsoft.graph.somethingFromTheFuture",
        "allowedRegistrant": "everyone"
    });
    let reg = deserialize_from_value(
        &unrecognized,
        AnyMeetingRegistration::create_from_discriminator_value,
    )
    .unwrap();
    match reg {
        AnyMeetingRegistration::Base(base) => {
            assert_eq!(base.allowed_registrant(), Some(MeetingAudience::Everyone));
        }
        other => panic!("expected the base variant, got {other:?}"),
    }
}

#[test]
fn concrete_variants_re_emit_their_type_tag() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.mobileAppDependency",
        "targetId": "target-app",
        "targetType": "child",
        "dependencyType": "autoInstall",
        "dependentAppCount": 3
    });

    let rel = deserialize_from_value(
        &doc,
        AnyMobileAppRelationship::create_from_discriminator_value,
    )
    .unwrap();

    match &rel {
        AnyMobileAppRelationship::Dependency(dep) => {
            assert_eq!(dep.base().target_id(), Some("target-app"));
            assert_eq!(dep.base().target_type(), Some(MobileAppRelationshipType::Child));
            assert_eq!(dep.dependency_type(), Some(MobileAppDependencyType::AutoInstall));
            assert_eq!(dep.dependent_app_count(), Some(3));
        }
        other => panic!("expected the mobileAppDependency variant, got {other:?}"),
    }

    // The tag survives encode, so a second decode dispatches identically.
    let encoded = serialize_to_value(&rel).unwrap();
    assert_eq!(
        encoded.get("@odata.type").and_then(|v| v.as_str()),
        Some("#microsoft.graph.mobileAppDependency")
    );
    let again = deserialize_from_value(
        &encoded,
        AnyMobileAppRelationship::create_from_discriminator_value,
    )
    .unwrap();
    assert_eq!(again, rel);
}

#[test]
fn closed_enum_rejects_unknown_strings() {
    let doc = json!({
        "targetType": "sibling"
    });
    let err = deserialize_from_value(
        &doc,
        AnyMobileAppRelationship::create_from_discriminator_value,
    )
    .unwrap_err();
    match err {
        ParseError::UnknownEnumValue { enum_name, value } => {
            assert_eq!(enum_name, "mobileAppRelationshipType");
            assert_eq!(value, "sibling");
        }
        other => panic!("expected an unknown-enum-value error, got {other}"),
    }
}

#[test]
fn open_family_preserves_unknown_fields_through_the_subtype() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.mobileAppTroubleshootingAppStateHistory",
        "occurrenceDateTime": "2023-06-15T08:00:00Z",
        "errorCode": "0x87D1041C",
        "runState": "fail",
        "deviceFirmwareBuild": "10.0.22621"
    });

    let item = deserialize_from_value(
        &doc,
        AnyMobileAppTroubleshootingHistoryItem::create_from_discriminator_value,
    )
    .unwrap();

    match &item {
        AnyMobileAppTroubleshootingHistoryItem::AppStateHistory(h) => {
            assert_eq!(h.error_code(), Some("0x87D1041C"));
            assert_eq!(h.run_state(), Some(RunState::Fail));
            assert_eq!(
                h.base().additional_data().get("deviceFirmwareBuild"),
                Some(&json!("10.0.22621"))
            );
        }
        other => panic!("expected the appStateHistory variant, got {other:?}"),
    }

    let encoded = serialize_to_value(&item).unwrap();
    assert_eq!(
        encoded.get("deviceFirmwareBuild"),
        Some(&json!("10.0.22621"))
    );
}

#[test]
fn troubleshooting_base_is_the_fallback_variant() {
    let doc = json!({"occurrenceDateTime": "2023-06-15T08:00:00Z"});
    let item = deserialize_from_value(
        &doc,
        AnyMobileAppTroubleshootingHistoryItem::create_from_discriminator_value,
    )
    .unwrap();
    assert!(matches!(
        item,
        AnyMobileAppTroubleshootingHistoryItem::Base(_)
    ));
}
