//! Reservation lifecycle: booking, queueing, cancellation and promotion.
//!
//! Every write that touches a slot key runs in one transaction holding the
//! slot's advisory lock ([`roomescape_db::locks::lock_slot`]). That gives a
//! single writer per slot, which keeps two invariants under concurrency:
//!
//! - at most one reservation per slot key;
//! - when a reservation is deleted, the earliest waiting entry for the slot
//!   (by `created_at`, then `id`) is promoted in the same transaction, so no
//!   reader or writer ever sees the slot freed while a queue exists.
//!
//! Authentication and role checks happen in the extractors before these
//! functions run; the only failures raised here are validation, not-found
//! and the ownership check on waiting cancellation.

use chrono::{Local, NaiveDate};
use roomescape_core::error::CoreError;
use roomescape_core::messages;
use roomescape_core::slot::SlotKey;
use roomescape_core::types::DbId;
use roomescape_core::validation::ensure_not_past;
use roomescape_db::locks::lock_slot;
use roomescape_db::models::reservation::{CreateReservation, Reservation, ReservationDetail};
use roomescape_db::models::waiting::{CreateWaiting, Waiting, WaitingDetail};
use roomescape_db::repositories::{
    MemberRepo, ReservationRepo, ReservationTimeRepo, ThemeRepo, WaitingRepo,
};
use roomescape_db::DbPool;

use crate::error::AppResult;

/// A booking request as received. Fields are optional so that a missing
/// value is reported as a validation failure rather than a decode error.
#[derive(Debug, Clone, Default)]
pub struct NewReservation {
    pub date: Option<NaiveDate>,
    pub time_id: Option<DbId>,
    pub theme_id: Option<DbId>,
}

/// Result of [`ReservationLifecycle::create_reservation`].
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// The slot was free; the caller now holds it.
    Created(Reservation),
    /// The slot was taken; the caller was appended to its queue.
    Waiting(Waiting),
}

/// Result of [`ReservationLifecycle::delete_reservation`].
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub deleted: Reservation,
    /// The reservation created from the first waiting entry, if one existed.
    pub promoted: Option<Reservation>,
}

/// Everything one member has booked or queued for.
#[derive(Debug, Clone)]
pub struct MemberBookings {
    pub reservations: Vec<ReservationDetail>,
    pub waitings: Vec<WaitingDetail>,
}

pub struct ReservationLifecycle;

impl ReservationLifecycle {
    /// All confirmed reservations with their details. Read-only.
    pub async fn list_reservations(pool: &DbPool) -> AppResult<Vec<ReservationDetail>> {
        Ok(ReservationRepo::list_all(pool).await?)
    }

    /// All waiting entries with their queue rank. Read-only.
    pub async fn list_waitings(pool: &DbPool) -> AppResult<Vec<WaitingDetail>> {
        Ok(WaitingRepo::list_all(pool).await?)
    }

    /// The reservations and waiting entries owned by `member_id`.
    pub async fn list_member_bookings(pool: &DbPool, member_id: DbId) -> AppResult<MemberBookings> {
        let reservations = ReservationRepo::list_by_member(pool, member_id).await?;
        let waitings = WaitingRepo::list_by_member(pool, member_id).await?;
        Ok(MemberBookings {
            reservations,
            waitings,
        })
    }

    /// Book the requested slot for `member_id`, or queue behind the current
    /// holder when the slot is taken.
    ///
    /// Missing fields fail with [`CoreError::MissingArgument`] before any
    /// database access.
    pub async fn create_reservation(
        pool: &DbPool,
        member_id: DbId,
        request: NewReservation,
    ) -> AppResult<CreateOutcome> {
        let slot = SlotKey::from_parts(request.date, request.time_id, request.theme_id)?;

        let time = ReservationTimeRepo::find_by_id(pool, slot.time_id)
            .await?
            .ok_or_else(|| CoreError::Validation(messages::UNKNOWN_TIME.into()))?;
        ThemeRepo::find_by_id(pool, slot.theme_id)
            .await?
            .ok_or_else(|| CoreError::Validation(messages::UNKNOWN_THEME.into()))?;
        MemberRepo::find_by_id(pool, member_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Member",
                id: member_id,
            })?;

        ensure_not_past(slot.date, time.start_at, Local::now().naive_local())?;

        let mut tx = pool.begin().await?;
        lock_slot(&mut *tx, &slot).await?;

        let outcome = match ReservationRepo::find_by_slot(&mut *tx, &slot).await? {
            None => {
                let reservation =
                    ReservationRepo::create(&mut *tx, &CreateReservation { member_id, slot })
                        .await?;
                CreateOutcome::Created(reservation)
            }
            Some(holder) => {
                if holder.member_id == member_id {
                    return Err(CoreError::Validation(messages::ALREADY_RESERVED.into()).into());
                }
                if WaitingRepo::exists_for_member(&mut *tx, &slot, member_id).await? {
                    return Err(CoreError::Validation(messages::ALREADY_WAITING.into()).into());
                }
                let waiting =
                    WaitingRepo::create(&mut *tx, &CreateWaiting { member_id, slot }).await?;
                CreateOutcome::Waiting(waiting)
            }
        };

        tx.commit().await?;

        match &outcome {
            CreateOutcome::Created(r) => {
                tracing::info!(reservation_id = r.id, member_id, %slot, "Reservation created");
            }
            CreateOutcome::Waiting(w) => {
                tracing::info!(waiting_id = w.id, member_id, %slot, "Slot taken, member queued");
            }
        }
        Ok(outcome)
    }

    /// Delete a reservation and promote the first waiting entry for its slot.
    ///
    /// The promoted reservation keeps the waiting member and receives a new
    /// id. Fails with [`CoreError::NotFound`] and changes nothing when the
    /// reservation does not exist, including when a concurrent delete won.
    pub async fn delete_reservation(
        pool: &DbPool,
        reservation_id: DbId,
    ) -> AppResult<DeleteOutcome> {
        let not_found = || CoreError::NotFound {
            entity: "Reservation",
            id: reservation_id,
        };

        // Unlocked read only to learn which slot to lock.
        let slot = ReservationRepo::find_by_id(pool, reservation_id)
            .await?
            .ok_or_else(not_found)?
            .slot();

        let mut tx = pool.begin().await?;
        lock_slot(&mut *tx, &slot).await?;

        let deleted = ReservationRepo::find_by_id_for_update(&mut *tx, reservation_id)
            .await?
            .ok_or_else(not_found)?;
        ReservationRepo::delete_by_id(&mut *tx, deleted.id).await?;

        let promoted = match WaitingRepo::first_in_line(&mut *tx, &slot).await? {
            Some(next) => {
                WaitingRepo::delete_by_id(&mut *tx, next.id).await?;
                let reservation = ReservationRepo::create(
                    &mut *tx,
                    &CreateReservation {
                        member_id: next.member_id,
                        slot,
                    },
                )
                .await?;
                Some((next, reservation))
            }
            None => None,
        };

        tx.commit().await?;

        match &promoted {
            Some((waiting, reservation)) => tracing::info!(
                reservation_id,
                waiting_id = waiting.id,
                promoted_reservation_id = reservation.id,
                member_id = reservation.member_id,
                %slot,
                "Reservation deleted, first waiting entry promoted"
            ),
            None => tracing::info!(reservation_id, %slot, "Reservation deleted, queue empty"),
        }

        Ok(DeleteOutcome {
            deleted,
            promoted: promoted.map(|(_, reservation)| reservation),
        })
    }

    /// Remove a waiting entry. Only its owner or an admin may do so.
    pub async fn cancel_waiting(
        pool: &DbPool,
        caller_id: DbId,
        caller_is_admin: bool,
        waiting_id: DbId,
    ) -> AppResult<()> {
        let not_found = || CoreError::NotFound {
            entity: "Waiting",
            id: waiting_id,
        };

        let waiting = WaitingRepo::find_by_id(pool, waiting_id)
            .await?
            .ok_or_else(not_found)?;
        if waiting.member_id != caller_id && !caller_is_admin {
            return Err(CoreError::Forbidden(messages::NOT_WAITING_OWNER.into()).into());
        }

        let slot = waiting.slot();
        let mut tx = pool.begin().await?;
        lock_slot(&mut *tx, &slot).await?;
        // A promotion may have consumed the entry since the read above.
        if !WaitingRepo::delete_by_id(&mut *tx, waiting_id).await? {
            return Err(not_found().into());
        }
        tx.commit().await?;

        tracing::info!(waiting_id, member_id = waiting.member_id, %slot, "Waiting entry cancelled");
        Ok(())
    }
}
