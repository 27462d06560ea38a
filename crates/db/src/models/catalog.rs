//! Reference rows a slot key points at: time slots and themes.

use chrono::NaiveTime;
use roomescape_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reservation_times` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservationTime {
    pub id: DbId,
    pub start_at: NaiveTime,
}

/// A row from the `themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theme {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone)]
pub struct CreateTheme {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}
