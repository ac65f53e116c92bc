//! Backend for a museum website.
//!
//! Serves public visitor information (hours, holidays, events, a localized newsletter),
//! manages member accounts behind bearer tokens, and runs two background sweeps: a
//! monthly newsletter dispatch and a per-minute drain of the outbound email queue.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::credentials::CredentialStore;
use crate::delivery::EmailDelivery;

pub mod api;
pub mod config;
pub mod credentials;
pub mod delivery;
pub mod entity;
pub mod error;
pub mod newsletter;
pub mod seed;
pub mod store;
pub mod sweeps;

#[derive(Clone)]
pub struct AppResources {
    pub db: Arc<DatabaseConnection>,
    pub delivery: Arc<dyn EmailDelivery>,
    pub credentials: Arc<CredentialStore>,
    pub config: Arc<AppConfig>,
}

impl AppResources {
    pub fn new(
        db: Arc<DatabaseConnection>,
        delivery: Arc<dyn EmailDelivery>,
        config: Arc<AppConfig>,
    ) -> Self {
        let credentials = Arc::new(CredentialStore::new(&config.token_secret));
        Self {
            db,
            delivery,
            credentials,
            config,
        }
    }
}

impl std::fmt::Debug for AppResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppResources")
            .field("db", &self.db)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
