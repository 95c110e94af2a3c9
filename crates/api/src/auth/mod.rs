//! Authentication primitives for the single administrator identity.
//!
//! - [`password`] -- Argon2id hashing and verification of the admin credential.
//! - [`jwt`] -- signed, expiry-bearing session tokens (HS256).

pub mod jwt;
pub mod password;
