//! Outbound email drain.

use crate::delivery::{EmailDelivery, OutgoingEmail};
use crate::entity::timestamp_now;
use crate::store::outbound_emails;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub sent: usize,
    pub failed: usize,
}

/// Attempt every eligible queued email once, then commit the status updates together.
///
/// Deliveries run before the transaction opens. Successful rows become `sent` with
/// `sent_at` stamped; failed rows become `failed` and their retry count grows until the
/// ceiling, after which they are left alone.
#[tracing::instrument(skip_all)]
pub async fn run_email_queue_sweep(
    db: &DatabaseConnection,
    delivery: &dyn EmailDelivery,
) -> Result<DrainReport, DbErr> {
    let batch = outbound_emails::list_eligible(db).await?;
    if batch.is_empty() {
        tracing::debug!(
            name = "sweeps.email_queue.empty",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            message = "No emails in queue"
        );
        return Ok(DrainReport::default());
    }

    let mut report = DrainReport::default();
    let mut outcomes = Vec::with_capacity(batch.len());
    for row in batch {
        debug_assert!(row.is_eligible());
        let email = OutgoingEmail {
            recipient: row.recipient.clone(),
            subject: row.subject.clone(),
            body: row.body.clone(),
        };
        match delivery.send(&email).await {
            Ok(()) => {
                report.sent += 1;
                outcomes.push((row, Some(timestamp_now())));
            }
            Err(e) => {
                tracing::warn!(
                    name = "sweeps.email_queue.delivery_failed",
                    target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
                    error = %e,
                    queue_id = row.id,
                    recipient = %row.recipient,
                    retry_count = row.retry_count,
                    message = "Failed to send queued email"
                );
                report.failed += 1;
                outcomes.push((row, None));
            }
        }
    }

    let txn = db.begin().await?;
    for (row, sent_at) in outcomes {
        match sent_at {
            Some(sent_at) => outbound_emails::mark_sent(&txn, row, sent_at).await?,
            None => outbound_emails::mark_failed(&txn, row).await?,
        };
    }
    txn.commit().await?;
    tracing::info!(
        name = "sweeps.email_queue.completed",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        sent = report.sent,
        failed = report.failed,
        message = "Email queue processed"
    );
    Ok(report)
}

/// Run the drain and swallow any error so the schedule survives a bad run.
pub async fn email_queue_sweep_job(db: &DatabaseConnection, delivery: &dyn EmailDelivery) {
    if let Err(e) = run_email_queue_sweep(db, delivery).await {
        tracing::error!(
            name = "sweeps.email_queue.run_failed",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            error = %e,
            message = "Error in email queue task"
        );
    }
}
