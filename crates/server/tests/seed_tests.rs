mod common;

use common::create_test_db;
use museum_backend::seed::{DEFAULT_EVENTS, DEFAULT_HOLIDAYS, DEFAULT_HOURS, SeedReport, seed_defaults};
use museum_backend::store::calendar;
use time::macros::date;

#[tokio::test]
async fn test_seed_fills_empty_tables() {
    let db = create_test_db().await;
    let report = seed_defaults(&db).await.expect("seed");
    assert_eq!(
        report,
        SeedReport {
            hours: DEFAULT_HOURS.len(),
            holidays: DEFAULT_HOLIDAYS.len(),
            events: DEFAULT_EVENTS.len(),
        }
    );

    let hours = calendar::list_operating_hours(&db).await.expect("hours");
    assert_eq!(hours.len(), 7);
    let events = calendar::list_events(&db).await.expect("events");
    assert!(events.iter().all(|e| e.description.is_some()));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = create_test_db().await;
    seed_defaults(&db).await.expect("seed");
    let second = seed_defaults(&db).await.expect("seed again");
    assert_eq!(second, SeedReport::default());
    assert_eq!(calendar::list_holidays(&db).await.expect("holidays").len(), 6);
}

#[tokio::test]
async fn test_seed_leaves_populated_tables_alone() {
    let db = create_test_db().await;
    calendar::create_holiday(&db, "Staff Day".into(), date!(2026 - 03 - 02))
        .await
        .expect("holiday");

    let report = seed_defaults(&db).await.expect("seed");
    assert_eq!(report.holidays, 0);
    assert_eq!(report.hours, 7);
    assert_eq!(report.events, 4);

    let holidays = calendar::list_holidays(&db).await.expect("holidays");
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].name, "Staff Day");
}
