//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Settings for validating caller identity tokens.
///
/// Tokens are issued elsewhere; this service only verifies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC-SHA256 secret used to verify token signatures.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected `iss` claim. Not checked when unset.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Clock-skew leeway applied to `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Name of the session cookie consulted when no bearer token is sent.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            issuer: None,
            leeway_seconds: default_leeway(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    5
}

fn default_cookie_name() -> String {
    "drive_session".to_string()
}
