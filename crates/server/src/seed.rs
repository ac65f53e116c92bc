//! Default museum calendar inserted into empty tables.

use crate::store::calendar;
use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};
use time::Date;
use time::macros::date;

pub const DEFAULT_HOURS: [(&str, &str); 7] = [
    ("Mon", "Closed"),
    ("Tues", "10:00 AM - 5:00 PM"),
    ("Wed", "10:00 AM - 5:00 PM"),
    ("Thurs", "10:00 AM - 5:00 PM"),
    ("Fri", "10:00 AM - 5:00 PM"),
    ("Sat", "10:00 AM - 5:00 PM"),
    ("Sun", "12:00 PM - 5:00 PM"),
];

pub const DEFAULT_HOLIDAYS: [(&str, Date); 6] = [
    ("New Year's Day", date!(2026 - 01 - 01)),
    ("Memorial Day", date!(2026 - 05 - 25)),
    ("Independence Day", date!(2026 - 07 - 04)),
    ("Labor Day", date!(2026 - 09 - 07)),
    ("Thanksgiving Day", date!(2026 - 11 - 26)),
    ("Christmas Day", date!(2026 - 12 - 25)),
];

pub const DEFAULT_EVENTS: [(Date, &str, &str); 4] = [
    (
        date!(2026 - 01 - 14),
        "Conversation Pieces",
        "Join us for an engaging discussion about contemporary art pieces in our collection. This interactive event brings together art enthusiasts and experts to explore the stories behind the artworks.",
    ),
    (
        date!(2026 - 01 - 14),
        "Musing Together",
        "A collaborative art experience where visitors can share their thoughts and interpretations of featured exhibitions. Perfect for families and groups looking to connect through art.",
    ),
    (
        date!(2026 - 01 - 15),
        "Toddler Thursday",
        "A special program designed for toddlers and their caregivers. Explore art through play, storytelling, and hands-on activities in our family-friendly gallery spaces.",
    ),
    (
        date!(2026 - 01 - 16),
        "Friday Night Jazz",
        "Experience the perfect blend of art and music. Enjoy live jazz performances while exploring our galleries after hours. Food and beverages available for purchase.",
    ),
];

/// Rows inserted by one [`seed_defaults`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub hours: usize,
    pub holidays: usize,
    pub events: usize,
}

/// Fill each calendar table with the defaults if, and only if, it is empty.
#[tracing::instrument(skip_all)]
pub async fn seed_defaults<C>(db: &C) -> Result<SeedReport, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    if calendar::list_operating_hours(&txn).await?.is_empty() {
        for (day, hours) in DEFAULT_HOURS {
            calendar::create_operating_hour(&txn, day, hours).await?;
            report.hours += 1;
        }
    }
    if calendar::list_holidays(&txn).await?.is_empty() {
        for (name, date) in DEFAULT_HOLIDAYS {
            calendar::create_holiday(&txn, name.to_string(), date).await?;
            report.holidays += 1;
        }
    }
    if calendar::list_events(&txn).await?.is_empty() {
        for (date, title, description) in DEFAULT_EVENTS {
            calendar::create_event(&txn, title.to_string(), date, Some(description.to_string()))
                .await?;
            report.events += 1;
        }
    }

    txn.commit().await?;
    tracing::info!(
        hours = report.hours,
        holidays = report.holidays,
        events = report.events,
        "seeded default calendar"
    );
    Ok(report)
}
