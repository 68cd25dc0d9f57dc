//! ORCID identity repository.
//!
//! The table carries a UNIQUE constraint on `user_id`, so "create or attach"
//! after an authorization exchange is an upsert. A re-authorization refreshes
//! the tokens but leaves the user's sync preferences untouched.
//!
//! Ownership checks live here rather than in the handlers: `find_owned`
//! scopes the lookup to the requesting user, so a delete for someone else's
//! identity id simply finds nothing.

use crate::{DbError, Result as DbErrorResult};

use atrium_core::{OrcidIdentity, WorkSyncPreference};

use std::collections::HashMap;
use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, orcid_id, access_token, refresh_token,
        token_expires_at, work_sync_preference, profile_sync_preference,
        created_at, updated_at
    FROM orcid_identities
"#;

pub struct OrcidIdentityRepository {
    pool: SqlitePool,
}

impl OrcidIdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the identity for a user, or refresh the tokens of the existing
    /// one. Returns the stored row, id included.
    pub async fn upsert(&self, identity: &OrcidIdentity) -> DbErrorResult<OrcidIdentity> {
        let user_id = identity.user_id.to_string();
        let token_expires_at = identity.token_expires_at.map(|dt| dt.timestamp());
        let work_sync_preference = identity.work_sync_preference.as_str();
        let profile_sync_preference = encode_profile_preference(&identity.profile_sync_preference)?;
        let created_at = identity.created_at.timestamp();
        let updated_at = identity.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO orcid_identities (
                    user_id, orcid_id, access_token, refresh_token,
                    token_expires_at, work_sync_preference, profile_sync_preference,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT (user_id) DO UPDATE SET
                    orcid_id = excluded.orcid_id,
                    access_token = excluded.access_token,
                    refresh_token = excluded.refresh_token,
                    token_expires_at = excluded.token_expires_at,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&user_id)
        .bind(&identity.orcid_id)
        .bind(&identity.access_token)
        .bind(&identity.refresh_token)
        .bind(token_expires_at)
        .bind(work_sync_preference)
        .bind(&profile_sync_preference)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        self.find_by_user(identity.user_id)
            .await?
            .ok_or_else(|| DbError::CorruptRow {
                message: format!("orcid identity for user {} vanished after upsert", user_id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<OrcidIdentity>> {
        let user_id = user_id.to_string();

        let row = sqlx::query(&format!("{} WHERE user_id = ?", SELECT_COLUMNS))
            .bind(&user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_identity).transpose()
    }

    /// Owner-scoped lookup: only finds the row when it belongs to `user_id`
    /// AND has the given id.
    pub async fn find_owned(&self, user_id: Uuid, id: i64) -> DbErrorResult<Option<OrcidIdentity>> {
        let user_id = user_id.to_string();

        let row = sqlx::query(&format!("{} WHERE id = ? AND user_id = ?", SELECT_COLUMNS))
            .bind(id)
            .bind(&user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_identity).transpose()
    }

    /// Lookup by the external ORCID iD, used when matching work creators.
    pub async fn find_by_orcid(&self, orcid_id: &str) -> DbErrorResult<Option<OrcidIdentity>> {
        let row = sqlx::query(&format!("{} WHERE orcid_id = ?", SELECT_COLUMNS))
            .bind(orcid_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_identity).transpose()
    }

    /// Persist preference changes for an existing identity.
    pub async fn update_preferences(&self, identity: &OrcidIdentity) -> DbErrorResult<()> {
        let work_sync_preference = identity.work_sync_preference.as_str();
        let profile_sync_preference = encode_profile_preference(&identity.profile_sync_preference)?;
        let updated_at = identity.updated_at.timestamp();

        sqlx::query(
            r#"
                UPDATE orcid_identities
                SET work_sync_preference = ?, profile_sync_preference = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(work_sync_preference)
        .bind(&profile_sync_preference)
        .bind(updated_at)
        .bind(identity.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete by row id. Returns whether a row was actually removed, so a
    /// second delete of the same id reads as a miss.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM orcid_identities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn encode_profile_preference(preference: &HashMap<String, bool>) -> DbErrorResult<String> {
    serde_json::to_string(preference).map_err(|e| DbError::CorruptRow {
        message: format!("Cannot encode profile_sync_preference: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn corrupt<S: Into<String>>(message: S) -> DbError {
    DbError::CorruptRow {
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}

fn row_to_identity(row: SqliteRow) -> DbErrorResult<OrcidIdentity> {
    let user_id: String = row.try_get("user_id")?;
    let work_sync_preference: String = row.try_get("work_sync_preference")?;
    let profile_sync_preference: String = row.try_get("profile_sync_preference")?;
    let token_expires_at: Option<i64> = row.try_get("token_expires_at")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(OrcidIdentity {
        id: row.try_get("id")?,
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| corrupt(format!("Invalid UUID in orcid_identity.user_id: {}", e)))?,
        orcid_id: row.try_get("orcid_id")?,
        access_token: row.try_get("access_token")?,
        refresh_token: row.try_get("refresh_token")?,
        token_expires_at: token_expires_at
            .map(|ts| {
                DateTime::from_timestamp(ts, 0).ok_or_else(|| {
                    corrupt("Invalid timestamp in orcid_identity.token_expires_at")
                })
            })
            .transpose()?,
        work_sync_preference: WorkSyncPreference::from_str(&work_sync_preference).map_err(|e| {
            corrupt(format!(
                "Invalid preference in orcid_identity.work_sync_preference: {}",
                e
            ))
        })?,
        profile_sync_preference: serde_json::from_str(&profile_sync_preference).map_err(|e| {
            corrupt(format!(
                "Invalid JSON in orcid_identity.profile_sync_preference: {}",
                e
            ))
        })?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| corrupt("Invalid timestamp in orcid_identity.created_at"))?,
        updated_at: DateTime::from_timestamp(updated_at, 0)
            .ok_or_else(|| corrupt("Invalid timestamp in orcid_identity.updated_at"))?,
    })
}
