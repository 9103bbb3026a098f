//! Calendar-date handling for pet birth dates (`YYYY-MM-DD`, no time of day).

use time::macros::format_description;
use time::Date;

time::serde::format_description!(pub birth_format, Date, "[year]-[month]-[day]");

/// Parse a birth date strictly as `YYYY-MM-DD`.
///
/// Only four-digit unsigned years are accepted; `[year]` alone would also
/// take a leading `+` or `-`.
pub fn parse_birth_date(raw: &str) -> Result<Date, time::error::Parse> {
    if !has_calendar_date_shape(raw) {
        return Err(time::error::Parse::ParseFromDescription(
            time::error::ParseFromDescription::InvalidComponent("year"),
        ));
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
}

/// `dddd-dd-dd` with ASCII digits, nothing more.
fn has_calendar_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
