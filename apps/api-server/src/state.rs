//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConfig, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the application state with the configured store, falling back
    /// to the in-memory store when no database is reachable.
    pub async fn from_config(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let state = match &config.database {
            Some(db_config) => match connect_store(db_config, config.auto_migrate).await {
                Ok(posts) => Self::new(posts),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }
}

/// Connect to PostgreSQL, optionally migrate, and wrap the pool in a
/// post repository.
#[cfg(feature = "postgres")]
pub async fn connect_store(
    config: &DatabaseConfig,
    auto_migrate: bool,
) -> Result<Arc<dyn PostRepository>, sea_orm::DbErr> {
    use migration::{Migrator, MigratorTrait};

    let conn = blog_infra::database::connect(config).await?;

    if auto_migrate {
        Migrator::up(&conn, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(PostgresPostRepository::new(conn)))
}
