//! Drive node listing and moves.

pub mod service;

pub use service::FileService;
