//! Monthly newsletter fan-out.

use crate::delivery::{EmailDelivery, OutgoingEmail};
use crate::entity::newsletter_log::DispatchStatus;
use crate::entity::timestamp_now;
use crate::newsletter::ENGLISH;
use crate::store::{accounts, newsletter_logs};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

/// Outcome of one newsletter run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewsletterReport {
    pub notified: usize,
    pub failed: usize,
}

/// Send the newsletter link to every account and log one row per account.
///
/// Deliveries run outside any transaction so a slow mail relay never holds a pooled
/// connection. The log rows are then written in one transaction; a storage error rolls
/// all of them back, a delivery error is recorded as a `failed` row.
#[tracing::instrument(skip_all)]
pub async fn run_newsletter_sweep(
    db: &DatabaseConnection,
    delivery: &dyn EmailDelivery,
    newsletter_url: &str,
) -> Result<NewsletterReport, DbErr> {
    tracing::info!(
        name = "sweeps.newsletter.started",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        message = "Monthly newsletter task started"
    );
    let members = accounts::list_all(db).await?;
    let mut report = NewsletterReport::default();
    let mut outcomes = Vec::with_capacity(members.len());

    for member in members {
        let email = OutgoingEmail {
            recipient: member.email.clone(),
            subject: format!("Your {} newsletter", ENGLISH.month),
            body: format!(
                "The {} issue of the museum newsletter is ready: {newsletter_url}",
                ENGLISH.month
            ),
        };
        let status = match delivery.send(&email).await {
            Ok(()) => {
                report.notified += 1;
                DispatchStatus::Sent
            }
            Err(e) => {
                tracing::warn!(
                    name = "sweeps.newsletter.delivery_failed",
                    target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
                    error = %e,
                    recipient = %member.email,
                    message = "Failed to dispatch newsletter link"
                );
                report.failed += 1;
                DispatchStatus::Failed
            }
        };
        outcomes.push((member.email, timestamp_now(), status));
    }

    let txn = db.begin().await?;
    for (email, sent_at, status) in outcomes {
        newsletter_logs::create(&txn, &email, sent_at, status).await?;
    }
    txn.commit().await?;
    tracing::info!(
        name = "sweeps.newsletter.completed",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        notified = report.notified,
        failed = report.failed,
        message = "Monthly newsletter task completed"
    );
    Ok(report)
}

/// Run the sweep and swallow any error so the schedule survives a bad run.
pub async fn newsletter_sweep_job(
    db: &DatabaseConnection,
    delivery: &dyn EmailDelivery,
    newsletter_url: &str,
) {
    if let Err(e) = run_newsletter_sweep(db, delivery, newsletter_url).await {
        tracing::error!(
            name = "sweeps.newsletter.run_failed",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            error = %e,
            message = "Error in newsletter task"
        );
    }
}
