use atrium_core::Work;

use async_trait::async_trait;
use uuid::Uuid;

/// Everything an actor needs about the deletion in progress
#[derive(Debug, Clone)]
pub struct ActorEnv {
    pub work: Work,
    /// The user performing the deletion
    pub user_id: Uuid,
}

impl ActorEnv {
    pub fn new(work: Work, user_id: Uuid) -> Self {
        Self { work, user_id }
    }
}

/// One link in the deletion chain. Implementations act on the environment
/// and then delegate to the next actor; only the terminator ends the chain.
/// The returned bool is the chain's overall success.
#[async_trait]
pub trait Actor: Send + Sync {
    async fn destroy(&self, env: &ActorEnv) -> bool;
}
