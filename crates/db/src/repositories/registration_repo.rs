//! Repository for the `registrations` table.
//!
//! Provides registration CRUD plus the duplicate-guard lookup. The unique
//! indexes on email and phone number are the authoritative uniqueness
//! constraint; [`RegistrationRepo::find_conflict`] is the fast path that
//! produces a friendlier error before the insert is attempted.

use evreg_core::registration::RegistrationDraft;
use evreg_core::types::DbId;
use sqlx::PgPool;

use crate::models::registration::Registration;

/// Column list for `registrations` queries.
const REGISTRATION_COLUMNS: &str = "\
    id, first_name, last_name, phone_number, email, address, state, pincode, \
    age, created_at, updated_at";

/// Which fields of a candidate registration collide with an existing row.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateMatch {
    pub email_match: bool,
    pub phone_match: bool,
}

impl DuplicateMatch {
    /// True when either field collides.
    pub fn any(&self) -> bool {
        self.email_match || self.phone_match
    }
}

/// Raw conflict row; `bool_or` over zero rows yields NULLs.
#[derive(Debug, sqlx::FromRow)]
struct ConflictRow {
    email_match: Option<bool>,
    phone_match: Option<bool>,
}

/// Provides CRUD operations and the duplicate guard for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a validated draft, returning the stored row with its assigned
    /// id and timestamps.
    pub async fn create(pool: &PgPool, draft: &RegistrationDraft) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations \
                 (first_name, last_name, phone_number, email, address, state, pincode, age) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {REGISTRATION_COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(&draft.first_name)
            .bind(&draft.last_name)
            .bind(&draft.phone_number)
            .bind(&draft.email)
            .bind(&draft.address)
            .bind(&draft.state)
            .bind(&draft.pincode)
            .bind(draft.age)
            .fetch_one(pool)
            .await
    }

    /// List every registration, most recent submission first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Registration>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a registration by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!("SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE id = $1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Write a validated merged draft over an existing row, refreshing
    /// `updated_at`. Returns `None` if no row with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &RegistrationDraft,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!(
            "UPDATE registrations SET \
                 first_name = $2, last_name = $3, phone_number = $4, email = $5, \
                 address = $6, state = $7, pincode = $8, age = $9, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {REGISTRATION_COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .bind(&draft.first_name)
            .bind(&draft.last_name)
            .bind(&draft.phone_number)
            .bind(&draft.email)
            .bind(&draft.address)
            .bind(&draft.state)
            .bind(&draft.pincode)
            .bind(draft.age)
            .fetch_optional(pool)
            .await
    }

    /// Delete a registration by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Duplicate guard: does any existing row share this email or phone?
    ///
    /// A `None` field never matches (SQL NULL comparison), so callers may
    /// probe one field at a time. The result says which field(s) collided
    /// and leaks nothing else about the conflicting row.
    pub async fn find_conflict(
        pool: &PgPool,
        email: Option<&str>,
        phone_number: Option<&str>,
    ) -> Result<DuplicateMatch, sqlx::Error> {
        let row = sqlx::query_as::<_, ConflictRow>(
            "SELECT bool_or(email = $1) AS email_match, \
                    bool_or(phone_number = $2) AS phone_match \
             FROM registrations \
             WHERE email = $1 OR phone_number = $2",
        )
        .bind(email)
        .bind(phone_number)
        .fetch_one(pool)
        .await?;

        Ok(DuplicateMatch {
            email_match: row.email_match.unwrap_or(false),
            phone_match: row.phone_match.unwrap_or(false),
        })
    }
}
