//! Wire payloads exchanged between the API and its clients.

use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};

pub mod health;
pub mod message;
pub mod submission;

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T12:34:56.789Z`.
const ISO_8601_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Render `time` as an ISO-8601 UTC timestamp.
pub fn format_timestamp(time: OffsetDateTime) -> String {
    time.to_offset(UtcOffset::UTC)
        .format(ISO_8601_MILLIS)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
