use crate::{
    config::AppConfig,
    db::{DbPool, create_pool, create_memory_pool, run_migrations},
    store::{RecordStore, SeedPolicy},
};

/// The repository handle passed to every service call.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
}

impl AppState {
    pub fn new(pool: DbPool, config: &AppConfig) -> Self {
        Self {
            store: RecordStore::new(pool, config.key_prefix.clone(), config.seed_policy),
        }
    }

    /// Open the configured database and apply migrations.
    pub async fn open(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = create_pool(&config.database_url, config.max_connections).await?;
        run_migrations(&pool).await?;
        tracing::debug!(url = %config.database_url, "record store opened");
        Ok(Self::new(pool, config))
    }

    /// Fresh in-memory store with the default key prefix.
    pub async fn in_memory(seed_policy: SeedPolicy) -> anyhow::Result<Self> {
        let pool = create_memory_pool().await?;
        run_migrations(&pool).await?;
        let config = AppConfig {
            seed_policy,
            ..AppConfig::default()
        };
        Ok(Self::new(pool, &config))
    }
}
