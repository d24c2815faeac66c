//! # drive-auth
//!
//! Caller identity for CloudDrive. Sessions are issued by an external
//! identity provider as HS256 JWTs; this crate only verifies them and turns
//! the claims into an owner id.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder};
