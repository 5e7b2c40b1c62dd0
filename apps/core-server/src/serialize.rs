use serde::Serializer;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const FRONT_TIME_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// UTC timestamp with millisecond precision, e.g. `2024-05-01T10:15:30.000Z`.
pub fn front_time<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = value
        .to_offset(UtcOffset::UTC)
        .format(FRONT_TIME_FORMAT)
        .map_err(serde::ser::Error::custom)?;

    serializer.serialize_str(&formatted)
}
