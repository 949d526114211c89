//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! post storage and the page cache.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM; without it only
//!   the in-memory adapters are built

pub mod cache;
pub mod database;
pub mod memory;

pub use cache::InMemoryPageCache;
pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
