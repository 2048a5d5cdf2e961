use chrono::Utc;
use delymed_pharmacy::{config::AppConfig, seed, state::AppState, store::StoreKey};

/// Reset every collection to the default data set.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let state = AppState::open(&config).await?;
    let store = &state.store;

    store.clear().await?;

    let now = Utc::now();
    let medications = seed::medications();
    let orders = seed::orders(now);
    let notifications = seed::notifications(now);

    store.save_medications(&medications).await?;
    store.save_orders(&orders).await?;
    store.save_profile(&seed::profile()).await?;
    store
        .set(&store.key(StoreKey::Notifications), &notifications)
        .await?;

    println!(
        "Seed completed. {} medications, {} orders, {} notifications",
        medications.len(),
        orders.len(),
        notifications.len()
    );
    Ok(())
}
