use crate::OrcidConfig;

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

#[test]
fn given_defaults_when_validate_then_ok() {
    let config = OrcidConfig::default();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_zero_timeout_when_validate_then_err() {
    let config = OrcidConfig {
        request_timeout_secs: 0,
        ..OrcidConfig::default()
    };

    assert_that!(config.validate().is_err(), eq(true));
}

#[test]
fn given_oversized_timeout_when_validate_then_err() {
    let config = OrcidConfig {
        request_timeout_secs: crate::MAX_REQUEST_TIMEOUT_SECS + 1,
        ..OrcidConfig::default()
    };

    assert_that!(config.validate().is_err(), eq(true));
}

#[test]
fn given_client_id_without_secret_when_validate_then_err() {
    let config = OrcidConfig {
        client_id: Some(String::from("APP-XYZ")),
        ..OrcidConfig::default()
    };

    assert_that!(config.validate().is_err(), eq(true));
}

#[test]
fn given_both_credentials_when_validate_then_ok() {
    let config = OrcidConfig {
        client_id: Some(String::from("APP-XYZ")),
        client_secret: Some(String::from("hunter2")),
        ..OrcidConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}
