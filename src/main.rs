//! Campus Events service
//!
//! Main application entry point

use anyhow::Context;
use tracing::info;

use campus_events::{
    api::{create_router, AppState},
    config::Settings,
    database::{create_pool, DatabaseConfig, DatabaseService},
    services::EventRegistry,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;
    
    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;
    
    info!("Starting {}...", campus_events::info());
    
    // Initialize database connection
    info!("Connecting to database...");
    let db_config = DatabaseConfig::from(&settings.database);
    let db_pool = create_pool(&db_config).await?;
    let database_service = DatabaseService::new(db_pool);
    
    let bootstrap = &settings.bootstrap;
    if bootstrap.run_migrations || bootstrap.seed {
        info!(migrations = bootstrap.run_migrations, seed = bootstrap.seed, "Bootstrapping schema...");
        database_service.bootstrap(bootstrap.run_migrations, bootstrap.seed).await?;
    }
    
    let registry = EventRegistry::new(database_service);
    let router = create_router(AppState { registry });
    
    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    
    info!(address = %address, "Campus Events API is ready!");
    
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    
    info!("Campus Events API has been shut down.");
    
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
