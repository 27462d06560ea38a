//! Repositories for `reservation_times` and `themes`.
//!
//! Catalog management happens elsewhere; these only cover what the
//! reservation flow needs: lookups, plus inserts for seeding.

use chrono::NaiveTime;
use roomescape_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::catalog::{CreateTheme, ReservationTime, Theme};

pub struct ReservationTimeRepo;

impl ReservationTimeRepo {
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        start_at: NaiveTime,
    ) -> Result<ReservationTime, sqlx::Error> {
        sqlx::query_as::<_, ReservationTime>(
            "INSERT INTO reservation_times (start_at) VALUES ($1) RETURNING id, start_at",
        )
        .bind(start_at)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<ReservationTime>, sqlx::Error> {
        sqlx::query_as::<_, ReservationTime>(
            "SELECT id, start_at FROM reservation_times WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }
}

pub struct ThemeRepo;

impl ThemeRepo {
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateTheme,
    ) -> Result<Theme, sqlx::Error> {
        sqlx::query_as::<_, Theme>(
            "INSERT INTO themes (name, description, thumbnail)
             VALUES ($1, $2, $3)
             RETURNING id, name, description, thumbnail",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.thumbnail)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Theme>, sqlx::Error> {
        sqlx::query_as::<_, Theme>(
            "SELECT id, name, description, thumbnail FROM themes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }
}
