#![allow(dead_code)]

use delymed_pharmacy::{
    config::AppConfig,
    db::{create_memory_pool, run_migrations},
    state::AppState,
    store::SeedPolicy,
};

/// Fresh in-memory store with the default seed policy.
pub async fn fresh_state() -> anyhow::Result<AppState> {
    AppState::in_memory(SeedPolicy::default()).await
}

pub async fn state_with_policy(policy: SeedPolicy) -> anyhow::Result<AppState> {
    AppState::in_memory(policy).await
}

/// In-memory store whose keys live under `prefix`.
pub async fn state_with_prefix(prefix: &str) -> anyhow::Result<AppState> {
    let pool = create_memory_pool().await?;
    run_migrations(&pool).await?;
    let config = AppConfig {
        key_prefix: prefix.into(),
        ..AppConfig::default()
    };
    Ok(AppState::new(pool, &config))
}
