//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drive_core::types::UserId;

/// Context for the current authenticated request.
///
/// Extracted at the HTTP boundary and passed into service methods so that
/// every lookup is scoped to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The owner every lookup is scoped to.
    pub owner_id: UserId,
    /// Display name from the identity token, if present.
    pub display_name: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(owner_id: UserId, display_name: Option<String>) -> Self {
        Self {
            owner_id,
            display_name,
            request_time: Utc::now(),
        }
    }
}
