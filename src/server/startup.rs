use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::seed::SeedService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds demo data when enabled in configuration and the catalog is empty.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the seed flag
///
/// # Returns
/// - `Ok(())` - Seeding skipped or completed
/// - `Err(AppError)` - Database or hashing error while seeding
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if !config.seed_database {
        return Ok(());
    }

    let seeded = SeedService::new(db).seed_if_empty().await?;
    if seeded {
        tracing::info!("Seeded database with demo courses, lessons and study groups");
    } else {
        tracing::info!("Database already contains courses, skipping seed");
    }

    Ok(())
}

/// Builds the CORS layer allowing the configured frontend origin.
///
/// # Arguments
/// - `config` - Application configuration holding the allowed origin
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing JSON requests with bearer tokens from the origin
/// - `Err(AppError::ConfigErr)` - Origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}
