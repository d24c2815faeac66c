//! JWT token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use drive_core::config::AuthConfig;
use drive_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer.as_str()]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks the signature, expiry (with leeway), the issuer when one is
    /// configured, and that the subject is not blank.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!(error = %e, "Rejected session token");
                match e.kind() {
                    JwtErrorKind::ExpiredSignature => AppError::unauthorized("Token has expired"),
                    JwtErrorKind::InvalidToken => AppError::unauthorized("Invalid token format"),
                    JwtErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    JwtErrorKind::InvalidIssuer => AppError::unauthorized("Invalid token issuer"),
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        if token_data.claims.sub.as_str().trim().is_empty() {
            return Err(AppError::unauthorized("Token has no subject"));
        }

        Ok(token_data.claims)
    }
}
