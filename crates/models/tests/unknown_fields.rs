use graph_beta_models::{AuthenticationAppDeviceDetails, SignIn, SignInStatus};
use graph_serialization::{deserialize_from_value, serialize_to_value};
use serde_json::json;

#[test]
fn open_type_preserves_unknown_properties_verbatim() {
    let doc = json!({
        "errorCode": 0,
        "conditionalAccessAudiences": ["exchange", "sharepoint"],
        "serverFlags": {"nested": true},
        "deprecatedField": null
    });

    let status =
        deserialize_from_value(&doc, SignInStatus::create_from_discriminator_value).unwrap();
    assert_eq!(status.error_code(), Some(0));
    assert_eq!(status.additional_data().len(), 3);

    // Key and value come back untouched, explicit nulls included.
    assert_eq!(serialize_to_value(&status).unwrap(), doc);
}

#[test]
fn closed_entity_drops_unknown_properties() {
    let doc = json!({
        "appDisplayName": "Outlook",
        "serverAddedProperty": "dropped"
    });

    let sign_in =
        deserialize_from_value(&doc, SignIn::create_from_discriminator_value).unwrap();
    assert_eq!(
        serialize_to_value(&sign_in).unwrap(),
        json!({"appDisplayName": "Outlook"})
    );
}

#[test]
fn unknown_fields_survive_inside_a_nested_open_type() {
    let doc = json!({
        "appDisplayName": "Outlook",
        "status": {
            "errorCode": 50126,
            "serverOnlyDetail": "kept"
        }
    });

    let sign_in =
        deserialize_from_value(&doc, SignIn::create_from_discriminator_value).unwrap();
    let encoded = serialize_to_value(&sign_in).unwrap();
    assert_eq!(
        encoded.pointer("/status/serverOnlyDetail"),
        Some(&json!("kept"))
    );
}

#[test]
fn additional_data_setter_feeds_the_writer() {
    let mut details = AuthenticationAppDeviceDetails::new();
    details.set_client_app(Some("microsoftAuthenticator".to_string()));

    let mut extra = graph_serialization::AdditionalData::new();
    extra.insert("tenantHint".to_string(), json!("contoso"));
    details.set_additional_data(extra);

    assert_eq!(
        serialize_to_value(&details).unwrap(),
        json!({"clientApp": "microsoftAuthenticator", "tenantHint": "contoso"})
    );
}
