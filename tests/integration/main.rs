//! HTTP-level integration tests, run against the in-memory node store.

mod cors_test;
mod files_test;
mod health_test;
mod path_test;
