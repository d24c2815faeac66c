//! # drive-database
//!
//! Access to the drive's node table. The [`FileStore`] trait is the seam the
//! services are written against; [`FileRepository`] implements it on
//! PostgreSQL and [`MemoryFileStore`] keeps everything in process.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryFileStore;
pub use repositories::FileRepository;
pub use store::{FileStore, TreeEdit};
