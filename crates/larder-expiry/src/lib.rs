//! # larder-expiry
//!
//! Two date pipelines share this crate on purpose: the strict freshness
//! classifier (`freshness`) rejects anything outside its four exact
//! patterns, while the scheduled check (`flexible` + `job`) tolerates
//! sloppy separators so hand-entered dates still produce alerts.

pub mod flexible;
pub mod freshness;
pub mod job;
pub mod schedule;

pub use freshness::{FreshnessClassifier, FreshnessStatus};
pub use job::ExpiryCheckJob;
