use crate::{OrcidIdentity, WorkSyncPreference};

use chrono::{Duration, Utc};
use uuid::Uuid;

fn identity() -> OrcidIdentity {
    OrcidIdentity::from_authorization(
        Uuid::new_v4(),
        "0000-0002-1825-0097".to_string(),
        "token".to_string(),
        Some("refresh".to_string()),
        Some(3600),
    )
}

#[test]
fn test_from_authorization_defaults() {
    let identity = identity();

    assert_eq!(identity.work_sync_preference, WorkSyncPreference::SyncAll);
    assert!(identity.profile_sync_preference.is_empty());
    assert!(identity.token_expires_at.is_some());
}

#[test]
fn test_work_sync_enabled() {
    let mut identity = identity();
    assert!(identity.work_sync_enabled());

    identity.work_sync_preference = WorkSyncPreference::SyncNotify;
    assert!(identity.work_sync_enabled());

    identity.work_sync_preference = WorkSyncPreference::Disabled;
    assert!(!identity.work_sync_enabled());
}

#[test]
fn test_token_expired() {
    let mut identity = identity();
    assert!(!identity.token_expired(Utc::now()));

    identity.token_expires_at = Some(Utc::now() - Duration::seconds(1));
    assert!(identity.token_expired(Utc::now()));

    // No recorded expiry means never expired
    identity.token_expires_at = None;
    assert!(!identity.token_expired(Utc::now()));
}
