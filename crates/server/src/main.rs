use migration::{Migrator, MigratorTrait};
use museum_backend::AppResources;
use museum_backend::api::start_webserver;
use museum_backend::config::load_config;
use museum_backend::delivery::{EmailDelivery, LogOnlyDelivery, SmtpDelivery};
use museum_backend::seed::seed_defaults;
use museum_backend::sweeps::{SweepScheduler, default_jobs};
use sea_orm::Database;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_standard_tracing() {
    let default_directives = "museum_backend=info,sea_orm=warn";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    initialize_standard_tracing();

    let config = Arc::new(load_config()?);

    let db = Arc::new(Database::connect(&config.database_url).await?);
    Migrator::up(db.as_ref(), None).await?;

    if config.seed_on_startup {
        seed_defaults(db.as_ref()).await?;
    }

    let delivery: Arc<dyn EmailDelivery> = match &config.smtp {
        Some(smtp) => {
            tracing::info!(server = %smtp.server, port = smtp.port, "using SMTP delivery");
            Arc::new(SmtpDelivery::from_config(smtp)?)
        }
        None => {
            tracing::warn!("no smtp block configured; outbound mail is only logged");
            Arc::new(LogOnlyDelivery)
        }
    };

    let scheduler = SweepScheduler::new(default_jobs(
        &config.sweeps,
        delivery.clone(),
        config.newsletter_url(),
    ));
    scheduler.start(db.clone()).await;

    let resources = AppResources::new(db, delivery, config.clone());
    let served = start_webserver(resources, &config.bind_address, shutdown_signal()).await;

    scheduler.stop().await;
    tracing::info!("background sweeps stopped");
    served
}
