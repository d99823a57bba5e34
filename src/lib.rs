//! # Highdon Hotels
//!
//! Hotel reservation service: room availability over date ranges and
//! atomic multi-room booking with collision-free references.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic: availability aggregation, the
//!   booking transaction orchestrator, reference generation
//! - **infrastructure**: External concerns (database, storage)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
