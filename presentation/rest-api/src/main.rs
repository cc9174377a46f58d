use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Environment-driven configuration (server, CORS, database, auth)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and bearer authentication
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables so RUST_LOG from .env is honoured
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.auth);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
