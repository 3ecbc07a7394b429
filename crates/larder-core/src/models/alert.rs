use serde::{Deserialize, Serialize};

/// One grouped expiry alert, delivered through a notification channel the
/// core does not own. Distinct ids let multiple alerts coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryAlert {
    pub id: u32,
    pub title: String,
    /// Up to three "name (exp: date)" entries, comma-joined, with a
    /// "+N more" suffix when the bucket overflows.
    pub body: String,
}
