//! # Quill Core
//!
//! The domain layer of Quill.
//! Validation, the mutation pipeline and read accessors, written against
//! ports with zero infrastructure dependencies.

pub mod actions;
pub mod domain;
pub mod error;
pub mod form;
pub mod mutation;
pub mod ports;
pub mod queries;
pub mod validation;

#[cfg(test)]
mod testing;

pub use actions::{ActionOutcome, LISTING_PATH, PostActions};
pub use error::{DomainError, RepoError};
pub use form::FormResult;
pub use validation::{PostInput, validate_post};
