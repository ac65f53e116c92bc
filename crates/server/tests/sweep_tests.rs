//! Newsletter sweep, email queue drain and the scheduler that runs them.

mod common;

use axum::http::StatusCode;
use common::{
    FailingDelivery, RecordingDelivery, SlowDelivery, create_test_db, create_test_resources,
    create_test_server, register,
};
use museum_backend::config::SweepConfig;
use museum_backend::entity::newsletter_log::DispatchStatus;
use museum_backend::entity::outbound_email::{EmailStatus, MAX_RETRIES};
use museum_backend::store::{accounts, newsletter_logs, outbound_emails};
use museum_backend::sweeps::{
    DrainReport, EMAIL_QUEUE_JOB, NEWSLETTER_JOB, NewsletterReport, SweepJob, SweepScheduler,
    Trigger, default_jobs, run_email_queue_sweep, run_newsletter_sweep,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

const URL: &str = "http://localhost:5173/newsletter";

// =============================================================================
// Newsletter sweep
// =============================================================================

#[tokio::test]
async fn test_newsletter_sweep_logs_each_member() {
    let db = create_test_db().await;
    for email in ["a@x.com", "b@x.com"] {
        accounts::create(&db, email.into(), "hash".into())
            .await
            .expect("account");
    }
    let delivery = RecordingDelivery::default();

    let report = run_newsletter_sweep(&db, &delivery, URL).await.expect("sweep");
    assert_eq!(report, NewsletterReport { notified: 2, failed: 0 });
    assert_eq!(delivery.recipients(), ["a@x.com", "b@x.com"]);
    let sent = delivery.sent.lock().expect("lock");
    assert!(sent.iter().all(|e| e.body.contains(URL)));
    drop(sent);

    let logs = newsletter_logs::list_recent(&db).await.expect("logs");
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l.status == DispatchStatus::Sent));
    assert_eq!(logs[0].user_email, "b@x.com");
}

#[tokio::test]
async fn test_newsletter_sweep_records_failures() {
    let db = create_test_db().await;
    accounts::create(&db, "a@x.com".into(), "hash".into())
        .await
        .expect("account");

    let report = run_newsletter_sweep(&db, &FailingDelivery, URL).await.expect("sweep");
    assert_eq!(report, NewsletterReport { notified: 0, failed: 1 });

    let logs = newsletter_logs::list_for_email(&db, "a@x.com").await.expect("logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, DispatchStatus::Failed);
}

#[tokio::test]
async fn test_newsletter_sweep_without_members() {
    let db = create_test_db().await;
    let report = run_newsletter_sweep(&db, &RecordingDelivery::default(), URL)
        .await
        .expect("sweep");
    assert_eq!(report, NewsletterReport::default());
    assert!(newsletter_logs::list_recent(&db).await.expect("logs").is_empty());
}

#[tokio::test]
async fn test_manual_trigger_and_log_readback() {
    let delivery = Arc::new(RecordingDelivery::default());
    let server = create_test_server(create_test_resources(delivery.clone()).await);
    register(&server, "a@x.com", "pw").await;

    let response = server.post("/api/admin/newsletter/test-trigger").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "message": "Newsletter task triggered manually. Check server logs and newsletter_logs table."
    }));
    assert_eq!(delivery.recipients(), ["a@x.com"]);

    let logs: Value = server.get("/api/admin/newsletter/logs").await.json();
    assert_eq!(logs[0]["user_email"], "a@x.com");
    assert_eq!(logs[0]["status"], "sent");
    assert!(logs[0]["sent_at"].as_str().is_some_and(|s| s.len() == 19));
}

#[tokio::test]
async fn test_log_readback_is_capped() {
    let resources = create_test_resources(Arc::new(RecordingDelivery::default())).await;
    for i in 0..60 {
        newsletter_logs::create(
            resources.db.as_ref(),
            &format!("m{i}@x.com"),
            "2026-01-01 09:00:00".into(),
            DispatchStatus::Sent,
        )
        .await
        .expect("log");
    }
    let server = create_test_server(resources);

    let logs: Value = server.get("/api/admin/newsletter/logs").await.json();
    let logs = logs.as_array().expect("array");
    assert_eq!(logs.len(), 50);
    assert_eq!(logs[0]["user_email"], "m59@x.com");
}

// =============================================================================
// Email queue
// =============================================================================

#[tokio::test]
async fn test_queue_email_endpoint() {
    let resources = create_test_resources(Arc::new(RecordingDelivery::default())).await;
    let server = create_test_server(resources.clone());

    let response = server
        .post("/api/email/queue")
        .json(&json!({"recipient": "v@x.com", "subject": "Tickets", "body": "See you soon"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Email queued for delivery");
    let id = body["queue_id"].as_i64().expect("queue_id") as i32;

    let row = outbound_emails::find_by_id(resources.db.as_ref(), id)
        .await
        .expect("query")
        .expect("row");
    assert_eq!(row.status, EmailStatus::Pending);
    assert_eq!(row.retry_count, 0);
    assert_eq!(row.sent_at, None);
}

#[tokio::test]
async fn test_queue_email_missing_field() {
    let server =
        create_test_server(create_test_resources(Arc::new(RecordingDelivery::default())).await);
    let response = server
        .post("/api/email/queue")
        .json(&json!({"recipient": "v@x.com", "subject": "Tickets"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_drain_marks_rows_sent() {
    let db = create_test_db().await;
    let queued = outbound_emails::enqueue(
        &db,
        "v@x.com".into(),
        "Tickets".into(),
        "body".into(),
        "2026-01-05 10:00:00".into(),
    )
    .await
    .expect("enqueue");
    let delivery = RecordingDelivery::default();

    let report = run_email_queue_sweep(&db, &delivery).await.expect("drain");
    assert_eq!(report, DrainReport { sent: 1, failed: 0 });

    let row = outbound_emails::find_by_id(&db, queued.id)
        .await
        .expect("query")
        .expect("row");
    assert_eq!(row.status, EmailStatus::Sent);
    assert!(row.sent_at.is_some());

    // Sent rows are never attempted again.
    let report = run_email_queue_sweep(&db, &delivery).await.expect("drain");
    assert_eq!(report, DrainReport::default());
    assert_eq!(delivery.recipients().len(), 1);
}

#[tokio::test]
async fn test_drain_retries_until_ceiling() {
    let db = create_test_db().await;
    let queued = outbound_emails::enqueue(
        &db,
        "v@x.com".into(),
        "Tickets".into(),
        "body".into(),
        "2026-01-05 10:00:00".into(),
    )
    .await
    .expect("enqueue");

    for attempt in 1..=MAX_RETRIES {
        let report = run_email_queue_sweep(&db, &FailingDelivery).await.expect("drain");
        assert_eq!(report, DrainReport { sent: 0, failed: 1 });
        let row = outbound_emails::find_by_id(&db, queued.id)
            .await
            .expect("query")
            .expect("row");
        assert_eq!(row.status, EmailStatus::Failed);
        assert_eq!(row.retry_count, attempt);
    }

    // At the ceiling the row is left alone, even with a working transport.
    let delivery = RecordingDelivery::default();
    let report = run_email_queue_sweep(&db, &delivery).await.expect("drain");
    assert_eq!(report, DrainReport::default());
    assert!(delivery.recipients().is_empty());
    let row = outbound_emails::find_by_id(&db, queued.id)
        .await
        .expect("query")
        .expect("row");
    assert_eq!(row.retry_count, MAX_RETRIES);
    assert_eq!(row.status, EmailStatus::Failed);
}

#[tokio::test]
async fn test_failed_row_recovers() {
    let db = create_test_db().await;
    let queued = outbound_emails::enqueue(
        &db,
        "v@x.com".into(),
        "s".into(),
        "b".into(),
        "2026-01-05 10:00:00".into(),
    )
    .await
    .expect("enqueue");

    run_email_queue_sweep(&db, &FailingDelivery).await.expect("drain");
    run_email_queue_sweep(&db, &RecordingDelivery::default())
        .await
        .expect("drain");

    let row = outbound_emails::find_by_id(&db, queued.id)
        .await
        .expect("query")
        .expect("row");
    assert_eq!(row.status, EmailStatus::Sent);
    assert_eq!(row.retry_count, 1);
}

#[tokio::test]
async fn test_newsletter_sweep_does_not_stall_requests() {
    let delivery = Arc::new(SlowDelivery {
        delay: Duration::from_millis(500),
    });
    let resources = create_test_resources(delivery.clone()).await;
    for email in ["a@x.com", "b@x.com", "c@x.com"] {
        accounts::create(resources.db.as_ref(), email.into(), "hash".into())
            .await
            .expect("account");
    }
    let server = create_test_server(resources.clone());

    let db = resources.db.clone();
    let sweep = tokio::spawn(async move {
        run_newsletter_sweep(db.as_ref(), delivery.as_ref(), URL).await
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let started = Instant::now();
    server.get("/api/hours").await.assert_status_ok();
    assert!(started.elapsed() < Duration::from_millis(400));

    let report = sweep.await.expect("join").expect("sweep");
    assert_eq!(report, NewsletterReport { notified: 3, failed: 0 });
    let logs = newsletter_logs::list_recent(resources.db.as_ref())
        .await
        .expect("logs");
    assert_eq!(logs.len(), 3);
}

#[tokio::test]
async fn test_drain_does_not_stall_requests() {
    let delivery = Arc::new(SlowDelivery {
        delay: Duration::from_millis(500),
    });
    let resources = create_test_resources(delivery.clone()).await;
    for subject in ["one", "two", "three"] {
        outbound_emails::enqueue(
            resources.db.as_ref(),
            "v@x.com".into(),
            subject.into(),
            "body".into(),
            "2026-01-05 10:00:00".into(),
        )
        .await
        .expect("enqueue");
    }
    let server = create_test_server(resources.clone());

    let db = resources.db.clone();
    let drain =
        tokio::spawn(async move { run_email_queue_sweep(db.as_ref(), delivery.as_ref()).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let started = Instant::now();
    server.get("/api/hours").await.assert_status_ok();
    assert!(started.elapsed() < Duration::from_millis(400));

    let report = drain.await.expect("join").expect("drain");
    assert_eq!(report, DrainReport { sent: 3, failed: 0 });
}

// =============================================================================
// Scheduler
// =============================================================================

#[tokio::test]
async fn test_default_jobs() {
    let jobs = default_jobs(
        &SweepConfig::default(),
        Arc::new(RecordingDelivery::default()),
        URL.into(),
    );
    let names: Vec<_> = jobs.iter().map(|j| j.name).collect();
    assert_eq!(names, [NEWSLETTER_JOB, EMAIL_QUEUE_JOB]);
    assert_eq!(
        jobs[0].trigger,
        Trigger::Monthly { day: 1, hour: 9, minute: 0 }
    );
    assert_eq!(jobs[1].trigger, Trigger::Interval(Duration::from_secs(60)));
}

#[tokio::test]
async fn test_scheduler_runs_and_stops() {
    let db = Arc::new(create_test_db().await);
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    let job = SweepJob::new(
        "counter",
        Trigger::Interval(Duration::from_millis(10)),
        move |_db| {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        },
    );
    let scheduler = SweepScheduler::new(vec![job]);
    assert!(!scheduler.is_running("counter").await);

    scheduler.start(db.clone()).await;
    assert!(scheduler.is_running("counter").await);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(runs.load(Ordering::SeqCst) >= 2);

    scheduler.stop().await;
    assert!(!scheduler.is_running("counter").await);
    let after_stop = runs.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(runs.load(Ordering::SeqCst), after_stop);
}

#[tokio::test]
async fn test_scheduler_start_is_idempotent() {
    let db = Arc::new(create_test_db().await);
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    let job = SweepJob::new(
        "slow",
        Trigger::Interval(Duration::from_secs(3600)),
        move |_db| {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        },
    );
    let scheduler = SweepScheduler::new(vec![job]);
    scheduler.start(db.clone()).await;
    scheduler.start(db).await;
    assert!(scheduler.is_running("slow").await);
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    scheduler.stop().await;
}
