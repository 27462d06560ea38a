//! Handlers for the `/waitings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use roomescape_core::types::{DbId, Timestamp};
use roomescape_db::models::waiting::WaitingDetail;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::reservation::{MemberSummary, ThemeSummary, TimeSummary};
use crate::middleware::auth::AuthMember;
use crate::middleware::rbac::RequireAdmin;
use crate::services::reservation_lifecycle::ReservationLifecycle;
use crate::state::AppState;

/// A waiting entry as listed by `GET /waitings`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitingResponse {
    pub id: DbId,
    pub member: MemberSummary,
    pub date: NaiveDate,
    pub time: TimeSummary,
    pub theme: ThemeSummary,
    pub rank: i64,
    pub created_at: Timestamp,
}

impl From<WaitingDetail> for WaitingResponse {
    fn from(d: WaitingDetail) -> Self {
        WaitingResponse {
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
            rank: d.rank,
            created_at: d.created_at,
        }
    }
}

/// GET /waitings (admin only)
pub async fn list_waitings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WaitingResponse>>> {
    let waitings = ReservationLifecycle::list_waitings(&state.pool).await?;
    Ok(Json(waitings.into_iter().map(Into::into).collect()))
}

/// DELETE /waitings/{id}
///
/// Members may cancel their own entries; admins may cancel any.
pub async fn cancel_waiting(
    member: AuthMember,
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<StatusCode> {
    ReservationLifecycle::cancel_waiting(&state.pool, member.member_id, member.is_admin(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
