use config::Config;
use sea_orm_migration::prelude::*;
use std::env;

#[tokio::main]
async fn main() {
    // DATABASE_URL wins; otherwise fall back to the server's config.yaml
    if env::var("DATABASE_URL").is_err() {
        let settings = Config::builder()
            .add_source(config::File::with_name("config.yaml").required(false))
            .build()
            .unwrap();
        let url = settings
            .get_string("database_url")
            .unwrap_or_else(|_| "sqlite://museum.db?mode=rwc".to_string());
        env::set_var("DATABASE_URL", url);
    }
    cli::run_cli(migration::Migrator).await;
}
