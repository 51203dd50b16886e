use hm_server::app_state::AppState;
use hm_server::{build_router, logger};

use hm_auth::{AuthorizationResolver, ProvisioningSaga};
use hm_core::RandomSuffixSource;
use hm_db::{MembershipRepository, RoleRepository, TenantRepository};
use hm_identity::IdentityClient;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = hm_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = hm_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting hm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = hm_db::connect(
        &database_path,
        config.database.max_connections,
        Duration::from_secs(config.database.busy_timeout_secs),
    )
    .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    hm_db::migrate(&pool).await?;
    info!("Migrations complete");

    // Construct the collaborators once; every request reuses them.
    let identity = Arc::new(IdentityClient::new(
        &config.identity.base_url,
        &config.identity.anon_key,
        &config.identity.service_key,
        Duration::from_secs(config.identity.timeout_secs),
    )?);

    let tenants = Arc::new(TenantRepository::new(pool.clone()));
    let memberships = Arc::new(MembershipRepository::new(pool.clone()));
    let roles = Arc::new(RoleRepository::new(pool.clone()));

    let saga = Arc::new(ProvisioningSaga::new(
        identity.clone(),
        tenants.clone(),
        memberships.clone(),
        roles,
        Arc::new(RandomSuffixSource),
        config.provisioning.max_slug_attempts,
    ));

    let resolver = Arc::new(AuthorizationResolver::new(identity, tenants, memberships));

    // Build application state and router
    let app_state = AppState {
        pool,
        saga,
        resolver,
    };
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
        }
    }
}
