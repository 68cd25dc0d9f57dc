use atrium_jobs::{JobQueue, spawn_worker};
use atrium_orcid::OrcidClient;
use atrium_server::jobs::UnpublishWorkHandler;
use atrium_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Secrets (ORCID client credentials) may come from a .env file
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = atrium_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = atrium_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting atrium-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Install Prometheus recorder; counters no-op if this fails
    if let Err(e) = PrometheusBuilder::new().install() {
        warn!("Failed to install metrics exporter: {}", e);
    }

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    atrium_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // ORCID client: credentials are required to serve the callback at all
    let orcid = Arc::new(OrcidClient::new(&config.orcid)?);
    info!("ORCID client initialized");

    // Job queue and the ingest worker
    let jobs = JobQueue::new();
    let ingest_queue = config.jobs.ingest_queue_name.clone();
    let receiver = jobs.register(&ingest_queue);
    let handler = UnpublishWorkHandler::new(pool.clone(), orcid.clone());
    spawn_worker(ingest_queue, receiver, handler);

    // Build application state
    let app_state = AppState {
        pool,
        orcid,
        jobs,
        features: config.features.clone(),
    };

    // Build router
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
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
