//! Confirmed reservation model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use roomescape_core::slot::SlotKey;
use roomescape_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reservations` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub member_id: DbId,
    pub date: NaiveDate,
    pub time_id: DbId,
    pub theme_id: DbId,
    pub created_at: Timestamp,
}

impl Reservation {
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(self.date, self.time_id, self.theme_id)
    }
}

/// DTO for inserting a reservation.
#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub member_id: DbId,
    pub slot: SlotKey,
}

/// A reservation joined with its member, time slot and theme.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationDetail {
    pub id: DbId,
    pub member_id: DbId,
    pub member_name: String,
    pub date: NaiveDate,
    pub time_id: DbId,
    pub start_at: NaiveTime,
    pub theme_id: DbId,
    pub theme_name: String,
    pub theme_description: String,
    pub theme_thumbnail: String,
}
