//! Pure domain logic for the event registration service.
//!
//! No I/O lives here: field validation, the error taxonomy, and the
//! analytics aggregations are all plain functions over in-memory data so
//! they can be tested without a database.

pub mod analytics;
pub mod error;
pub mod registration;
pub mod types;
