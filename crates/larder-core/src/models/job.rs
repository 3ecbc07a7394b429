use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a scheduled run reports back to the external scheduler.
/// Retry means "re-invoke later"; the run itself never retries internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobOutcome {
    Success,
    Retry,
}

/// Registration policy for a periodic job that may already be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulePolicy {
    /// Leave an existing schedule in place (no duplicates).
    KeepExisting,
    /// Replace any existing schedule.
    Replace,
}

/// Plain-data description of a unit of scheduled work, consumed by the
/// external job-scheduling infrastructure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub unique_name: &'static str,
    /// None for one-shot work.
    pub period: Option<Duration>,
    pub policy: SchedulePolicy,
}

impl JobRequest {
    pub fn periodic(unique_name: &'static str, period: Duration) -> Self {
        Self {
            unique_name,
            period: Some(period),
            policy: SchedulePolicy::KeepExisting,
        }
    }

    pub fn one_shot(unique_name: &'static str) -> Self {
        Self {
            unique_name,
            period: None,
            policy: SchedulePolicy::Replace,
        }
    }
}
