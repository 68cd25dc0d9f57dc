use crate::WorkSyncPreference;

use std::str::FromStr;

#[test]
fn test_work_sync_preference_as_str() {
    assert_eq!(WorkSyncPreference::SyncAll.as_str(), "sync_all");
    assert_eq!(WorkSyncPreference::SyncNotify.as_str(), "sync_notify");
    assert_eq!(WorkSyncPreference::Disabled.as_str(), "disabled");
}

#[test]
fn test_work_sync_preference_from_str() {
    assert_eq!(
        WorkSyncPreference::from_str("sync_all").unwrap(),
        WorkSyncPreference::SyncAll
    );
    assert_eq!(
        WorkSyncPreference::from_str("sync_notify").unwrap(),
        WorkSyncPreference::SyncNotify
    );
    assert_eq!(
        WorkSyncPreference::from_str("disabled").unwrap(),
        WorkSyncPreference::Disabled
    );
    assert!(WorkSyncPreference::from_str("sometimes").is_err());
}

#[test]
fn test_work_sync_preference_default() {
    assert_eq!(WorkSyncPreference::default(), WorkSyncPreference::SyncAll);
}
