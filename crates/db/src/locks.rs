//! Transaction-scoped advisory locks.

use roomescape_core::slot::SlotKey;
use sqlx::PgExecutor;

/// Serialize all writers of `slot` until the enclosing transaction commits
/// or rolls back.
///
/// Must be called on a transaction connection; on a bare pool connection
/// the lock is released as soon as the statement finishes.
pub async fn lock_slot<'e, E: PgExecutor<'e>>(
    executor: E,
    slot: &SlotKey,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(slot.lock_key())
        .execute(executor)
        .await?;
    tracing::debug!(%slot, "Acquired slot lock");
    Ok(())
}
