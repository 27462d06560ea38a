//! Repository for the `waitings` table.
//!
//! Queue order within a slot key is `created_at ASC, id ASC`; every query
//! that picks or ranks entries uses that ordering.

use roomescape_core::slot::SlotKey;
use roomescape_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::waiting::{CreateWaiting, Waiting, WaitingDetail};

const COLUMNS: &str = "id, member_id, date, time_id, theme_id, created_at";

/// Joined projection with the entry's 1-based queue position.
const DETAIL_SELECT: &str = "SELECT w.id, w.member_id, m.name AS member_name, w.date, \
     w.time_id, t.start_at, w.theme_id, th.name AS theme_name, \
     th.description AS theme_description, th.thumbnail AS theme_thumbnail, w.created_at, \
     (SELECT COUNT(*) FROM waitings ahead \
       WHERE ahead.date = w.date AND ahead.time_id = w.time_id AND ahead.theme_id = w.theme_id \
         AND (ahead.created_at, ahead.id) < (w.created_at, w.id)) + 1 AS rank \
     FROM waitings w \
     JOIN members m ON m.id = w.member_id \
     JOIN reservation_times t ON t.id = w.time_id \
     JOIN themes th ON th.id = w.theme_id";

/// Persistence for waiting-list entries. No business rules live here.
pub struct WaitingRepo;

impl WaitingRepo {
    /// Append an entry to the end of its slot's queue.
    ///
    /// Fails with a unique violation on `uq_waitings_member_slot` if the
    /// member is already queued for the slot.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateWaiting,
    ) -> Result<Waiting, sqlx::Error> {
        let query = format!(
            "INSERT INTO waitings (member_id, date, time_id, theme_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Waiting>(&query)
            .bind(input.member_id)
            .bind(input.slot.date)
            .bind(input.slot.time_id)
            .bind(input.slot.theme_id)
            .fetch_one(executor)
            .await
    }

    /// List every waiting entry with details, grouped by slot in queue order.
    pub async fn list_all<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<WaitingDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} ORDER BY w.date ASC, t.start_at ASC, w.theme_id ASC, \
             w.created_at ASC, w.id ASC"
        );
        sqlx::query_as::<_, WaitingDetail>(&query)
            .fetch_all(executor)
            .await
    }

    /// List one member's waiting entries with their current rank.
    pub async fn list_by_member<'e, E: PgExecutor<'e>>(
        executor: E,
        member_id: DbId,
    ) -> Result<Vec<WaitingDetail>, sqlx::Error> {
        let query =
            format!("{DETAIL_SELECT} WHERE w.member_id = $1 ORDER BY w.date ASC, t.start_at ASC");
        sqlx::query_as::<_, WaitingDetail>(&query)
            .bind(member_id)
            .fetch_all(executor)
            .await
    }

    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Waiting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitings WHERE id = $1");
        sqlx::query_as::<_, Waiting>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// All entries queued for `slot`, first in line first.
    pub async fn find_by_slot<'e, E: PgExecutor<'e>>(
        executor: E,
        slot: &SlotKey,
    ) -> Result<Vec<Waiting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM waitings
             WHERE date = $1 AND time_id = $2 AND theme_id = $3
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Waiting>(&query)
            .bind(slot.date)
            .bind(slot.time_id)
            .bind(slot.theme_id)
            .fetch_all(executor)
            .await
    }

    /// The earliest entry for `slot`, row-locked until the enclosing
    /// transaction ends.
    pub async fn first_in_line<'e, E: PgExecutor<'e>>(
        executor: E,
        slot: &SlotKey,
    ) -> Result<Option<Waiting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM waitings
             WHERE date = $1 AND time_id = $2 AND theme_id = $3
             ORDER BY created_at ASC, id ASC
             LIMIT 1
             FOR UPDATE"
        );
        sqlx::query_as::<_, Waiting>(&query)
            .bind(slot.date)
            .bind(slot.time_id)
            .bind(slot.theme_id)
            .fetch_optional(executor)
            .await
    }

    /// Whether `member_id` already holds an entry for `slot`.
    pub async fn exists_for_member<'e, E: PgExecutor<'e>>(
        executor: E,
        slot: &SlotKey,
        member_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM waitings
                WHERE date = $1 AND time_id = $2 AND theme_id = $3 AND member_id = $4
             )",
        )
        .bind(slot.date)
        .bind(slot.time_id)
        .bind(slot.theme_id)
        .bind(member_id)
        .fetch_one(executor)
        .await
    }

    /// Delete an entry by id. Returns `true` if a row was removed.
    pub async fn delete_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM waitings WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
