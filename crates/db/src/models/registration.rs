//! Registration row model and update DTO.

use evreg_core::registration::RegistrationDraft;
use evreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `registrations` table.
///
/// Serialized camelCase to match the public wire format.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub state: String,
    pub pincode: String,
    pub age: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Registration {
    /// The candidate field set of this row, used as the base for merges.
    pub fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            state: self.state.clone(),
            pincode: self.pincode.clone(),
            age: self.age,
        }
    }
}

/// DTO for partial or full updates. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistration {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub age: Option<i32>,
}

impl UpdateRegistration {
    /// Merge this patch over an existing row, producing the candidate field
    /// set that must be re-validated before it is written back.
    pub fn merge_into(&self, existing: &Registration) -> RegistrationDraft {
        let base = existing.draft();
        RegistrationDraft {
            first_name: self.first_name.clone().unwrap_or(base.first_name),
            last_name: self.last_name.clone().unwrap_or(base.last_name),
            phone_number: self.phone_number.clone().unwrap_or(base.phone_number),
            email: self.email.clone().unwrap_or(base.email),
            address: self.address.clone().unwrap_or(base.address),
            state: self.state.clone().unwrap_or(base.state),
            pincode: self.pincode.clone().unwrap_or(base.pincode),
            age: self.age.unwrap_or(base.age),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn existing_row() -> Registration {
        Registration {
            id: 7,
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha.verma@example.com".to_string(),
            address: "12 MG Road".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            age: 29,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_merge_changes_only_provided_fields() {
        let patch = UpdateRegistration {
            age: Some(30),
            ..Default::default()
        };

        let merged = patch.merge_into(&existing_row());
        assert_eq!(merged.age, 30);
        assert_eq!(merged.first_name, "Asha");
        assert_eq!(merged.email, "asha.verma@example.com");
        assert_eq!(merged.pincode, "560001");
    }

    #[test]
    fn test_merge_full_replacement() {
        let patch = UpdateRegistration {
            first_name: Some("Ravi".to_string()),
            last_name: Some("Iyer".to_string()),
            phone_number: Some("9123456789".to_string()),
            email: Some("ravi.iyer@example.com".to_string()),
            address: Some("4 Park Street".to_string()),
            state: Some("West Bengal".to_string()),
            pincode: Some("700016".to_string()),
            age: Some(41),
        };

        let merged = patch.merge_into(&existing_row());
        assert_eq!(merged.first_name, "Ravi");
        assert_eq!(merged.state, "West Bengal");
        assert_eq!(merged.age, 41);
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let row = existing_row();
        let json = serde_json::to_value(&row).expect("row should serialize");
        assert!(json.get("firstName").is_some());
        assert!(json.get("phoneNumber").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("first_name").is_none());
    }
}
