//! HTTP request handlers, one module per resource.

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod registrations;
