//! Handlers for the `/reservations` resource and its admin counterpart.
//!
//! Request bodies keep every field optional so that a `null` or absent value
//! reaches the lifecycle service and is reported with the fixed
//! missing-argument message instead of a serde error.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::WithRejection;
use chrono::{NaiveDate, NaiveTime};
use roomescape_core::types::DbId;
use roomescape_core::validation::require;
use roomescape_db::models::reservation::{Reservation, ReservationDetail};
use roomescape_db::models::waiting::{Waiting, WaitingDetail};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::middleware::rbac::RequireAdmin;
use crate::services::reservation_lifecycle::{
    CreateOutcome, NewReservation, ReservationLifecycle,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /reservations`. The member comes from the session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub date: Option<NaiveDate>,
    pub time_id: Option<DbId>,
    pub theme_id: Option<DbId>,
}

impl From<CreateReservationRequest> for NewReservation {
    fn from(req: CreateReservationRequest) -> Self {
        NewReservation {
            date: req.date,
            time_id: req.time_id,
            theme_id: req.theme_id,
        }
    }
}

/// Request body for `POST /admin/reservations`, booking on a member's behalf.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateReservationRequest {
    pub member_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    pub time_id: Option<DbId>,
    pub theme_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct MemberSummary {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSummary {
    pub id: DbId,
    pub start_at: NaiveTime,
}

#[derive(Debug, Serialize)]
pub struct ThemeSummary {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

/// A confirmed reservation as listed by `GET /reservations`.
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: DbId,
    pub member: MemberSummary,
    pub date: NaiveDate,
    pub time: TimeSummary,
    pub theme: ThemeSummary,
}

impl From<ReservationDetail> for ReservationResponse {
    fn from(d: ReservationDetail) -> Self {
        ReservationResponse {
            id: d.id,
            member: MemberSummary {
                id: d.member_id,
                name: d.member_name,
            },
            date: d.date,
            time: TimeSummary {
                id: d.time_id,
                start_at: d.start_at,
            },
            theme: ThemeSummary {
                id: d.theme_id,
                name: d.theme_name,
                description: d.theme_description,
                thumbnail: d.theme_thumbnail,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Reserved,
    Waiting,
}

/// Body returned by the create endpoints for either outcome.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: DbId,
    pub member_id: DbId,
    pub date: NaiveDate,
    pub time_id: DbId,
    pub theme_id: DbId,
    pub status: BookingStatus,
}

impl From<&Reservation> for BookingResponse {
    fn from(r: &Reservation) -> Self {
        BookingResponse {
            id: r.id,
            member_id: r.member_id,
            date: r.date,
            time_id: r.time_id,
            theme_id: r.theme_id,
            status: BookingStatus::Reserved,
        }
    }
}

impl From<&Waiting> for BookingResponse {
    fn from(w: &Waiting) -> Self {
        BookingResponse {
            id: w.id,
            member_id: w.member_id,
            date: w.date,
            time_id: w.time_id,
            theme_id: w.theme_id,
            status: BookingStatus::Waiting,
        }
    }
}

/// One row of `GET /reservations/mine`.
#[derive(Debug, Serialize)]
pub struct MyBookingResponse {
    pub id: DbId,
    pub date: NaiveDate,
    pub time: TimeSummary,
    pub theme: ThemeSummary,
    pub status: BookingStatus,
    /// 1-based queue position; absent for confirmed reservations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
}

impl From<ReservationDetail> for MyBookingResponse {
    fn from(d: ReservationDetail) -> Self {
        let ReservationResponse {
            id,
            date,
            time,
            theme,
            ..
        } = d.into();
        MyBookingResponse {
            id,
            date,
            time,
            theme,
            status: BookingStatus::Reserved,
            rank: None,
        }
    }
}

impl From<WaitingDetail> for MyBookingResponse {
    fn from(d: WaitingDetail) -> Self {
        MyBookingResponse {
            id: d.id,
            date: d.date,
            time: TimeSummary {
                id: d.time_id,
                start_at: d.start_at,
            },
            theme: ThemeSummary {
                id: d.theme_id,
                name: d.theme_name,
                description: d.theme_description,
                thumbnail: d.theme_thumbnail,
            },
            status: BookingStatus::Waiting,
            rank: Some(d.rank),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    let reservations = ReservationLifecycle::list_reservations(&state.pool).await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// POST /reservations
///
/// 201 with `Location: /reservations/{id}` when the slot was free,
/// 202 with `Location: /waitings/{id}` when the caller was queued.
pub async fn create_reservation(
    member: AuthMember,
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateReservationRequest>, AppError>,
) -> AppResult<Response> {
    let outcome =
        ReservationLifecycle::create_reservation(&state.pool, member.member_id, input.into())
            .await?;
    Ok(outcome_response(outcome))
}

/// POST /admin/reservations
///
/// Same outcome mapping as [`create_reservation`], for an arbitrary member.
pub async fn admin_create_reservation(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<AdminCreateReservationRequest>, AppError>,
) -> AppResult<Response> {
    let member_id = require(input.member_id)?;
    tracing::debug!(admin_id = admin.member_id, member_id, "Admin booking on behalf of member");

    let request = NewReservation {
        date: input.date,
        time_id: input.time_id,
        theme_id: input.theme_id,
    };
    let outcome = ReservationLifecycle::create_reservation(&state.pool, member_id, request).await?;
    Ok(outcome_response(outcome))
}

/// DELETE /reservations/{id}
///
/// 204 on success (after promoting the next waiting entry, if any), 404 if
/// the reservation does not exist. No session is required.
pub async fn delete_reservation(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<StatusCode> {
    let outcome = ReservationLifecycle::delete_reservation(&state.pool, id).await?;
    tracing::debug!(
        reservation_id = outcome.deleted.id,
        promoted = outcome.promoted.is_some(),
        "Delete request served"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// GET /reservations/mine
///
/// The caller's confirmed reservations followed by their waiting entries.
pub async fn list_my_bookings(
    member: AuthMember,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MyBookingResponse>>> {
    let bookings = ReservationLifecycle::list_member_bookings(&state.pool, member.member_id).await?;

    let response = bookings
        .reservations
        .into_iter()
        .map(MyBookingResponse::from)
        .chain(bookings.waitings.into_iter().map(MyBookingResponse::from))
        .collect();
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn outcome_response(outcome: CreateOutcome) -> Response {
    match outcome {
        CreateOutcome::Created(reservation) => (
            StatusCode::CREATED,
            [(LOCATION, format!("/reservations/{}", reservation.id))],
            Json(BookingResponse::from(&reservation)),
        )
            .into_response(),
        CreateOutcome::Waiting(waiting) => (
            StatusCode::ACCEPTED,
            [(LOCATION, format!("/waitings/{}", waiting.id))],
            Json(BookingResponse::from(&waiting)),
        )
            .into_response(),
    }
}
