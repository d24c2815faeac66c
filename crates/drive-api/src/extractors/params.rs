//! Query-string and path extractors that reject with the API error body.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use drive_core::error::AppError;

use crate::error::ApiError;

/// [`Query`] whose failures are `400 VALIDATION_ERROR` JSON responses.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(invalid_query(rejection)),
        }
    }
}

/// [`Path`] whose failures are `400 VALIDATION_ERROR` JSON responses.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(invalid_path(rejection)),
        }
    }
}

fn invalid_query(rejection: QueryRejection) -> ApiError {
    AppError::validation(rejection.body_text()).into()
}

fn invalid_path(rejection: PathRejection) -> ApiError {
    AppError::validation(rejection.body_text()).into()
}
