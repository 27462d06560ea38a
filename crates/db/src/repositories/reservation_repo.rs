//! Repository for the `reservations` table.

use roomescape_core::slot::SlotKey;
use roomescape_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::reservation::{CreateReservation, Reservation, ReservationDetail};

const COLUMNS: &str = "id, member_id, date, time_id, theme_id, created_at";

/// Joined projection used by the listing endpoints.
const DETAIL_SELECT: &str = "SELECT r.id, r.member_id, m.name AS member_name, r.date, \
     r.time_id, t.start_at, r.theme_id, th.name AS theme_name, \
     th.description AS theme_description, th.thumbnail AS theme_thumbnail \
     FROM reservations r \
     JOIN members m ON m.id = r.member_id \
     JOIN reservation_times t ON t.id = r.time_id \
     JOIN themes th ON th.id = r.theme_id";

/// Persistence for confirmed reservations. No business rules live here.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a reservation, returning the row with its assigned id.
    ///
    /// Fails with a unique violation on `uq_reservations_slot` if the slot
    /// is already taken.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (member_id, date, time_id, theme_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.member_id)
            .bind(input.slot.date)
            .bind(input.slot.time_id)
            .bind(input.slot.theme_id)
            .fetch_one(executor)
            .await
    }

    /// List every reservation with member, time and theme details, ordered by id.
    pub async fn list_all<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY r.id ASC");
        sqlx::query_as::<_, ReservationDetail>(&query)
            .fetch_all(executor)
            .await
    }

    /// List one member's reservations, soonest first.
    pub async fn list_by_member<'e, E: PgExecutor<'e>>(
        executor: E,
        member_id: DbId,
    ) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        let query =
            format!("{DETAIL_SELECT} WHERE r.member_id = $1 ORDER BY r.date ASC, t.start_at ASC");
        sqlx::query_as::<_, ReservationDetail>(&query)
            .bind(member_id)
            .fetch_all(executor)
            .await
    }

    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Like [`Self::find_by_id`] but row-locks the reservation until the
    /// enclosing transaction ends. Only meaningful inside a transaction.
    pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// The reservation occupying `slot`, if any. At most one can exist.
    pub async fn find_by_slot<'e, E: PgExecutor<'e>>(
        executor: E,
        slot: &SlotKey,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE date = $1 AND time_id = $2 AND theme_id = $3"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(slot.date)
            .bind(slot.time_id)
            .bind(slot.theme_id)
            .fetch_optional(executor)
            .await
    }

    /// Delete a reservation by id. Returns `true` if a row was removed.
    pub async fn delete_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
