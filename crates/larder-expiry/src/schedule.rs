//! Job descriptors for the external scheduler.

use std::time::Duration;

use larder_core::config::ExpiryConfig;
use larder_core::models::JobRequest;

/// Unique name of the periodic expiry check.
pub const EXPIRY_CHECK_JOB_NAME: &str = "expiry_check";

/// Unique name of the immediate first-launch check.
pub const EXPIRY_CHECK_NOW_JOB_NAME: &str = "expiry_check_now";

/// Periodic registration: keep-existing policy, so re-registering at
/// every startup never stacks duplicate schedules.
pub fn periodic_request(config: &ExpiryConfig) -> JobRequest {
    JobRequest::periodic(
        EXPIRY_CHECK_JOB_NAME,
        Duration::from_secs(config.period_hours * 3600),
    )
}

/// Run-once request for first-launch population.
pub fn immediate_request() -> JobRequest {
    JobRequest::one_shot(EXPIRY_CHECK_NOW_JOB_NAME)
}
