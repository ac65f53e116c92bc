//! Outbound email delivery capability.
//!
//! Sweeps never talk to a transport directly; they hold an `Arc<dyn EmailDelivery>`.
//! The default [`LogOnlyDelivery`] only records the message and always succeeds.
//! [`SmtpDelivery`] is used when an `smtp` block is configured.

use crate::config::SmtpConfig;
use crate::error::DeliveryError;
use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// A single message handed to a delivery backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;
}

/// Writes the message to the log and reports success.
#[derive(Clone, Debug, Default)]
pub struct LogOnlyDelivery;

#[async_trait]
impl EmailDelivery for LogOnlyDelivery {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        tracing::info!(
            name = "delivery.log_only.sent",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            recipient = %email.recipient,
            subject = %email.subject,
            message = "Simulated email delivery"
        );
        Ok(())
    }
}

/// Sends plain-text mail through an SMTP relay.
pub struct SmtpDelivery {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl std::fmt::Debug for SmtpDelivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpDelivery")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl SmtpDelivery {
    pub fn from_config(config: &SmtpConfig) -> Result<Self, DeliveryError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(creds)
            .build();
        let from = parse_mailbox(&config.from)?;
        Ok(Self { mailer, from })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| DeliveryError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

#[async_trait]
impl EmailDelivery for SmtpDelivery {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&email.recipient)?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| DeliveryError::Message(e.to_string()))?;

        self.mailer
            .send(message)
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        Ok(())
    }
}
