//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod registration_repo;

pub use registration_repo::{DuplicateMatch, RegistrationRepo};
