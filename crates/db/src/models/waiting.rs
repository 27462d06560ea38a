//! Waiting-list entry model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use roomescape_core::slot::SlotKey;
use roomescape_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `waitings` table.
///
/// Entries for one slot key are served in `(created_at, id)` order.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Waiting {
    pub id: DbId,
    pub member_id: DbId,
    pub date: NaiveDate,
    pub time_id: DbId,
    pub theme_id: DbId,
    pub created_at: Timestamp,
}

impl Waiting {
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(self.date, self.time_id, self.theme_id)
    }
}

/// DTO for appending a waiting entry.
#[derive(Debug, Clone)]
pub struct CreateWaiting {
    pub member_id: DbId,
    pub slot: SlotKey,
}

/// A waiting entry joined with member, time slot and theme, plus its
/// 1-based position in the slot's queue.
#[derive(Debug, Clone, FromRow)]
pub struct WaitingDetail {
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
    pub created_at: Timestamp,
    pub rank: i64,
}
