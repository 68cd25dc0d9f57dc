use crate::OrcidClient;
use crate::client::AuthorizationGrant;

use atrium_config::OrcidConfig;

use googletest::prelude::*;

fn configured() -> OrcidConfig {
    OrcidConfig {
        client_id: Some("APP-XYZ".to_string()),
        client_secret: Some("hunter2".to_string()),
        ..OrcidConfig::default()
    }
}

#[test]
fn given_credentials_when_new_then_ok() {
    assert_that!(OrcidClient::new(&configured()).is_ok(), eq(true));
}

#[test]
fn given_missing_credentials_when_new_then_not_configured() {
    let config = OrcidConfig::default();

    assert_that!(OrcidClient::new(&config).is_err(), eq(true));
}

#[test]
fn given_full_token_response_when_parsed_then_all_fields_present() {
    let body = r#"{
        "access_token": "89f0181c-168b-4d7d-831c-1fdda2d7bbbb",
        "token_type": "bearer",
        "refresh_token": "69e883f0-d5db-4071-8e93-e3bf48be0b67",
        "expires_in": 631138518,
        "scope": "/read-limited /activities/update",
        "name": "Josiah Carberry",
        "orcid": "0000-0002-1825-0097"
    }"#;

    let grant: AuthorizationGrant = serde_json::from_str(body).unwrap();

    assert_that!(grant.orcid.as_str(), eq("0000-0002-1825-0097"));
    assert_that!(grant.expires_in, some(eq(631138518)));
    assert_that!(grant.name.as_deref(), some(eq("Josiah Carberry")));
}

#[test]
fn given_minimal_token_response_when_parsed_then_optional_fields_absent() {
    let body = r#"{"access_token": "token", "orcid": "0000-0002-1825-0097"}"#;

    let grant: AuthorizationGrant = serde_json::from_str(body).unwrap();

    assert_that!(grant.refresh_token, none());
    assert_that!(grant.expires_in, none());
    assert_that!(grant.scope, none());
}
