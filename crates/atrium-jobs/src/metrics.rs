use metrics::counter;

/// Metrics collector for queue operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "atrium_jobs",
        }
    }

    /// Record job enqueued
    pub fn job_enqueued(&self, queue: &str, job: &str) {
        counter!(format!("{}.enqueued", self.prefix)).increment(1);
        counter!(format!("{}.enqueued.{}.{}", self.prefix, queue, job)).increment(1);
    }

    /// Record job performed successfully
    pub fn job_performed(&self, queue: &str, job: &str) {
        counter!(format!("{}.performed", self.prefix)).increment(1);
        counter!(format!("{}.performed.{}.{}", self.prefix, queue, job)).increment(1);
    }

    /// Record job failure
    pub fn job_failed(&self, queue: &str, job: &str) {
        counter!(format!("{}.failed", self.prefix)).increment(1);
        counter!(format!("{}.failed.{}.{}", self.prefix, queue, job)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
