mod client_id;
mod metadata;
mod scheduler;

pub use self::client_id::identify_client;
pub use self::metadata::{FetchedVideo, MetadataService};
pub use self::scheduler::{JobResult, RateLimitSweepJob, SchedulerJob, SchedulerService};
