//! Slot keys: the `(date, time slot, theme)` tuple identifying a bookable unit.
//!
//! At most one reservation may exist per slot key, and waiting entries queue
//! up behind it in FIFO order.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// FNV-1a offset basis (64-bit).
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a prime (64-bit).
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Namespace mixed into every lock key so slot locks never collide with
/// advisory locks taken for other purposes.
const LOCK_NAMESPACE: &[u8] = b"roomescape.slot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub time_id: DbId,
    pub theme_id: DbId,
}

impl SlotKey {
    pub fn new(date: NaiveDate, time_id: DbId, theme_id: DbId) -> Self {
        Self {
            date,
            time_id,
            theme_id,
        }
    }

    /// Build a slot key from optional request fields.
    ///
    /// Any absent field yields [`CoreError::MissingArgument`].
    pub fn from_parts(
        date: Option<NaiveDate>,
        time_id: Option<DbId>,
        theme_id: Option<DbId>,
    ) -> Result<Self, CoreError> {
        match (date, time_id, theme_id) {
            (Some(date), Some(time_id), Some(theme_id)) => Ok(Self::new(date, time_id, theme_id)),
            _ => Err(CoreError::MissingArgument),
        }
    }

    /// Key for `pg_advisory_xact_lock`, stable across processes.
    ///
    /// Every operation that mutates reservations or waiting entries for a
    /// slot takes this lock first. Hash collisions only over-serialize
    /// unrelated slots; they never weaken the guarantee.
    pub fn lock_key(&self) -> i64 {
        let mut hash = FNV_OFFSET;
        let mut feed = |bytes: &[u8]| {
            for byte in bytes {
                hash ^= u64::from(*byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        };
        feed(LOCK_NAMESPACE);
        feed(&self.date.num_days_from_ce().to_le_bytes());
        feed(&self.time_id.to_le_bytes());
        feed(&self.theme_id.to_le_bytes());
        i64::from_ne_bytes(hash.to_ne_bytes())
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} time={} theme={}",
            self.date, self.time_id, self.theme_id
        )
    }
}
