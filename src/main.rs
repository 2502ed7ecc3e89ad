use anyhow::{Context, Result};
use dotenv::dotenv;
use storefront_api::{
    config::{Config, ConnectionManager},
    handler::AppRouter,
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("storefront_api");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to connect to the database")?;

    if config.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!()
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(pool);

    AppRouter::serve(&config, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down");

    Ok(())
}
