//! SeaORM entities for the six tables of the museum store.

pub mod account;
pub mod event;
pub mod holiday;
pub mod newsletter_log;
pub mod operating_hour;
pub mod outbound_email;

use time::{Date, OffsetDateTime};
use time::macros::format_description;

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Render a timestamp the way the text timestamp columns store it (`YYYY-MM-DD HH:MM:SS`).
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    at.format(&format)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Current UTC time in the text timestamp format.
pub fn timestamp_now() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}
