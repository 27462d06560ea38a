//! Request validation rules for reservations.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CoreError;
use crate::messages;

/// Unwrap a required request field, mapping `None` to
/// [`CoreError::MissingArgument`].
pub fn require<T>(value: Option<T>) -> Result<T, CoreError> {
    value.ok_or(CoreError::MissingArgument)
}

/// Reject slots whose start lies at or before `now`.
pub fn ensure_not_past(
    date: NaiveDate,
    start_at: NaiveTime,
    now: NaiveDateTime,
) -> Result<(), CoreError> {
    if date.and_time(start_at) <= now {
        return Err(CoreError::Validation(messages::PAST_SLOT.to_string()));
    }
    Ok(())
}
