//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! The create DTO for registrations is [`evreg_core::registration::RegistrationDraft`],
//! which carries the validation rules with it.

pub mod registration;
