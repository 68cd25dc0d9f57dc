pub mod error;
pub mod handler;
pub mod job;
pub mod metrics;
pub mod queue;
pub mod worker;

pub use error::{JobError, Result};
pub use handler::JobHandler;
pub use job::Job;
pub use metrics::Metrics;
pub use queue::JobQueue;
pub use worker::spawn_worker;

#[cfg(test)]
mod tests;
