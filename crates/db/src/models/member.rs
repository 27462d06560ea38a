//! Member entity model and DTOs.

use roomescape_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// `USER` or `ADMIN`, see [`roomescape_core::roles`].
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a member. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
