//! Work-deletion actor chain.
//!
//! The platform composes an ordered chain of actors and calls it when a
//! work is removed; each actor does its part and hands the environment to
//! the next. This crate contributes the actor that turns off ORCID sync
//! for the unpublished work.

pub mod actor;
pub mod terminator;
pub mod unpublish_work_actor;

pub use actor::{Actor, ActorEnv};
pub use terminator::Terminator;
pub use unpublish_work_actor::{ORCID_SYNC_FLAG, UnpublishWorkActor};
