use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

/// Schedule of the two background sweeps. Times are UTC.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SweepConfig {
    #[serde(default = "default_newsletter_day")]
    pub newsletter_day: u8,
    #[serde(default = "default_newsletter_hour")]
    pub newsletter_hour: u8,
    #[serde(default)]
    pub newsletter_minute: u8,
    #[serde(default = "default_email_queue_interval_secs")]
    pub email_queue_interval_secs: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            newsletter_day: default_newsletter_day(),
            newsletter_hour: default_newsletter_hour(),
            newsletter_minute: 0,
            email_queue_interval_secs: default_email_queue_interval_secs(),
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Shared HS256 secret for access tokens.
    pub token_secret: String,
    /// Base URL of the public site; the newsletter link is `{frontend_url}newsletter`.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
    #[serde(default)]
    pub seed_on_startup: bool,
    /// When absent, outbound mail is only logged.
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,
    #[serde(default)]
    pub sweeps: SweepConfig,
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_frontend_url() -> String {
    "http://localhost:5173/".to_string()
}

fn default_newsletter_day() -> u8 {
    1
}

fn default_newsletter_hour() -> u8 {
    9
}

fn default_email_queue_interval_secs() -> u64 {
    60
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_secret.len() < 16 {
            return Err(ConfigError::Validation(
                "token_secret must be at least 16 characters".into(),
            ));
        }
        if self.smtp.as_ref().is_some_and(|smtp| smtp.port == 0) {
            return Err(ConfigError::Validation("smtp.port must be > 0".into()));
        }
        let sweeps = &self.sweeps;
        if !(1..=28).contains(&sweeps.newsletter_day) {
            return Err(ConfigError::Validation(
                "sweeps.newsletter_day must be between 1 and 28".into(),
            ));
        }
        if sweeps.newsletter_hour > 23 || sweeps.newsletter_minute > 59 {
            return Err(ConfigError::Validation(
                "sweeps.newsletter_hour/newsletter_minute out of range".into(),
            ));
        }
        if sweeps.email_queue_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "sweeps.email_queue_interval_secs must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Link sent to members by the monthly newsletter sweep.
    pub fn newsletter_url(&self) -> String {
        format!("{}newsletter", self.frontend_url)
    }
}

/// Load application configuration from `config.yaml` + environment overrides.
///
/// Any environment variable matching the key path separated by double underscores
/// (e.g. `SWEEPS__EMAIL_QUEUE_INTERVAL_SECS`) overrides the file value.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from("config.yaml")
}

/// Same as [`load_config`] with an explicit file path.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};
    let cfg = Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(Environment::default().separator("__"))
        .build()?;

    let app: AppConfig = cfg.try_deserialize()?;
    app.validate()?;
    Ok(app)
}
