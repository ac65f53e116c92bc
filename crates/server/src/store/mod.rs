//! Persistence layer: small create/read/delete operations per table.
//!
//! Every function takes any [`sea_orm::ConnectionTrait`] so callers can run it either
//! directly on the connection (auto-committed) or inside a transaction that commits
//! once for a multi-row operation.

pub mod accounts;
pub mod calendar;
pub mod newsletter_logs;
pub mod outbound_emails;
