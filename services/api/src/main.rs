use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod repositories;
mod routes;
mod state;

use common::database::{DatabaseConfig, health_check, init_pool};

use crate::{repositories::UserRepository, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting user service");

    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "unknown".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);

    // Initialize the database connection pool. A failure here must not
    // crash the process: the service starts in degraded mode and the
    // data-dependent endpoints answer 503 until a restart.
    let db_config = DatabaseConfig::from_env()?;
    let user_repository = match init_pool(&db_config).await {
        Ok(pool) => {
            if health_check(&pool).await? {
                info!("Database connection successful");
            }

            if let Err(e) = repositories::ensure_schema(&pool).await {
                warn!("Could not create database tables: {}", e);
            }

            Some(UserRepository::new(pool))
        }
        Err(e) => {
            warn!(
                "Could not connect to database, starting in degraded mode: {}",
                e
            );
            None
        }
    };

    let app_state = AppState {
        user_repository,
        environment,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("User service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
