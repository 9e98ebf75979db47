use std::time::Duration;

use async_trait::async_trait;

pub type JobResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// A periodic background task managed by the scheduler.
#[async_trait]
pub trait SchedulerJob: Send + Sync {
    /// Job name for logging.
    fn name(&self) -> &'static str;

    /// How often the job runs.
    fn interval(&self) -> Duration;

    /// One execution of the job.
    async fn execute(&self) -> JobResult;
}
