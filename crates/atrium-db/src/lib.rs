pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::orcid_identity_repository::OrcidIdentityRepository;

/// Embedded migrations, run by the server at startup and by tests against
/// in-memory pools.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
