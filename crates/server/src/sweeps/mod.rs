//! Background sweeps.
//!
//! - `newsletter` - monthly fan-out writing one dispatch log row per account
//! - `email_queue` - interval drain of the outbound email table
//! - `scheduler` - owned start/stop lifecycle for both
//! - `trigger` - monthly and fixed-interval fire times

pub mod email_queue;
pub mod newsletter;
pub mod scheduler;
pub mod trigger;

pub use email_queue::{DrainReport, email_queue_sweep_job, run_email_queue_sweep};
pub use newsletter::{NewsletterReport, newsletter_sweep_job, run_newsletter_sweep};
pub use scheduler::{SweepFn, SweepJob, SweepScheduler, SweepTask};
pub use trigger::Trigger;

use crate::config::SweepConfig;
use crate::delivery::EmailDelivery;
use std::sync::Arc;
use std::time::Duration;

pub const NEWSLETTER_JOB: &str = "monthly_newsletter";
pub const EMAIL_QUEUE_JOB: &str = "email_queue_drain";

/// The two production sweeps wired to `delivery`.
pub fn default_jobs(
    config: &SweepConfig,
    delivery: Arc<dyn EmailDelivery>,
    newsletter_url: String,
) -> Vec<SweepJob> {
    let newsletter_delivery = delivery.clone();
    let newsletter = SweepJob::new(
        NEWSLETTER_JOB,
        Trigger::Monthly {
            day: config.newsletter_day,
            hour: config.newsletter_hour,
            minute: config.newsletter_minute,
        },
        move |db| {
            let delivery = newsletter_delivery.clone();
            let url = newsletter_url.clone();
            Box::pin(async move { newsletter_sweep_job(&db, delivery.as_ref(), &url).await })
        },
    );

    let email_queue = SweepJob::new(
        EMAIL_QUEUE_JOB,
        Trigger::Interval(Duration::from_secs(config.email_queue_interval_secs)),
        move |db| {
            let delivery = delivery.clone();
            Box::pin(async move { email_queue_sweep_job(&db, delivery.as_ref()).await })
        },
    );

    vec![newsletter, email_queue]
}
