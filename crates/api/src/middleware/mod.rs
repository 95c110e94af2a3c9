//! Request middleware and extractors.

pub mod auth;
