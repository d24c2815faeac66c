//! JWT claims carried by session tokens.

use serde::{Deserialize, Serialize};

use drive_core::types::UserId;

/// Claims payload of a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the owner id every lookup is scoped to.
    pub sub: UserId,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Display name, when the identity provider includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Claims {
    /// Returns the owner id from the subject claim.
    pub fn user_id(&self) -> &UserId {
        &self.sub
    }
}
