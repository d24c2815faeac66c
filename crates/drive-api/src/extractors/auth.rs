//! `AuthUser` extractor: pulls the identity token from the Authorization
//! header or the session cookie, validates it, and injects the caller context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use drive_core::error::AppError;
use drive_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?
            .or_else(|| {
                CookieJar::from_headers(&parts.headers)
                    .get(&state.config.auth.cookie_name)
                    .map(|c| c.value().to_string())
            })
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Missing credentials"))?;

        let claims = state.jwt_decoder.decode(&token)?;

        Ok(AuthUser(RequestContext::new(
            claims.user_id().clone(),
            claims.name,
        )))
    }
}

/// Reads a Bearer token from the Authorization header.
///
/// The scheme name is case-insensitive. A missing header is `Ok(None)`; any
/// other scheme is rejected rather than falling back to the cookie.
fn bearer_token(parts: &Parts) -> Result<Option<String>, AppError> {
    let Some(value) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid Authorization header"))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            Ok(Some(token.trim().to_string()))
        }
        _ => Err(AppError::unauthorized("Invalid Authorization header format")),
    }
}
