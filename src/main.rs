//!
//! Hotel reservation REST service.
//! Reads configuration from TOML file (~/.config/hotels-service/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use highdon_hotels::application::reference::ReferenceGenerator;
use highdon_hotels::application::room_lock::RoomLockRegistry;
use highdon_hotels::application::services::{BookingService, HotelService, RoomStayService};
use highdon_hotels::application::SystemClock;
use highdon_hotels::domain::RepositoryProvider;
use highdon_hotels::infrastructure::database::migrator::Migrator;
use highdon_hotels::infrastructure::database::seed;
use highdon_hotels::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("HOTELS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Highdon Hotels service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    if app_cfg.seed.enabled {
        if let Err(e) = seed::seed_if_empty(&db).await {
            error!("Failed to seed development data: {}", e);
            return Err(e.into());
        }
    }

    // ── Repositories & services ────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    let stays = Arc::new(RoomStayService::new());
    let references = Arc::new(ReferenceGenerator::new(
        &app_cfg.booking.reference_alphabet,
        app_cfg.booking.reference_min_length,
        app_cfg.booking.reference_max_attempts,
    )?);
    let room_locks = Arc::new(RoomLockRegistry::new());
    let clock = Arc::new(SystemClock);

    let hotel_service = Arc::new(HotelService::new(repos.clone(), stays.clone()));
    let booking_service = Arc::new(BookingService::new(
        repos,
        stays,
        references,
        room_locks,
        clock,
    ));

    // ── REST API server ────────────────────────────────────────
    let api_router = create_api_router(db.clone(), hotel_service, booking_service);

    let api_addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Highdon Hotels service shutdown complete");
    Ok(())
}
