//! Local key/value record store.
//!
//! Each key holds one JSON document in the `records` table. Reads fail soft:
//! a missing row, a storage error and an unparsable document all read as
//! `None`. Writes replace the whole document.

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    db::DbPool,
    error::AppResult,
    models::{AuthFlag, Medication, NotificationItem, Order, PharmacyProfile},
    seed,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Medications,
    Orders,
    Profile,
    Auth,
    Notifications,
}

impl StoreKey {
    pub const ALL: [StoreKey; 5] = [
        StoreKey::Medications,
        StoreKey::Orders,
        StoreKey::Profile,
        StoreKey::Auth,
        StoreKey::Notifications,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            StoreKey::Medications => "medications",
            StoreKey::Orders => "orders",
            StoreKey::Profile => "profile",
            StoreKey::Auth => "auth",
            StoreKey::Notifications => "notifications",
        }
    }
}

/// When a collection read falls back to seed data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Seed when the key is absent or holds an empty list. An explicitly
    /// saved empty collection comes back as the seed set on the next read.
    #[default]
    AbsentOrEmpty,
    /// Seed only when the key is absent.
    Absent,
}

#[derive(Clone)]
pub struct RecordStore {
    pool: DbPool,
    prefix: String,
    seed_policy: SeedPolicy,
}

impl RecordStore {
    pub fn new(pool: DbPool, prefix: impl Into<String>, seed_policy: SeedPolicy) -> Self {
        Self {
            pool,
            prefix: prefix.into(),
            seed_policy,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn key(&self, key: StoreKey) -> String {
        format!("{}.{}", self.prefix, key.suffix())
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let row = match sqlx::query_as::<_, (String,)>(
            "SELECT document FROM records WHERE record_key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(key, error = %err, "record read failed");
                return None;
            }
        };

        let (raw,) = row?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "stored record is not valid JSON for its type");
                None
            }
        }
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw).await
    }

    pub async fn remove(&self, key: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM records WHERE record_key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Write a raw document, bypassing serialization.
    pub async fn set_raw(&self, key: &str, raw: &str) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO records (record_key, document, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT (record_key) DO UPDATE
            SET document = excluded.document, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(raw)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_list_or_seed<T, F>(&self, key: StoreKey, seed: F) -> AppResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let key = self.key(key);
        if let Some(list) = self.get::<Vec<T>>(&key).await {
            let keep = match self.seed_policy {
                SeedPolicy::AbsentOrEmpty => !list.is_empty(),
                SeedPolicy::Absent => true,
            };
            if keep {
                return Ok(list);
            }
        }
        let seeded = seed();
        tracing::info!(key = %key, count = seeded.len(), "seeding default records");
        self.set(&key, &seeded).await?;
        Ok(seeded)
    }

    pub async fn get_medications(&self) -> AppResult<Vec<Medication>> {
        self.get_list_or_seed(StoreKey::Medications, seed::medications)
            .await
    }

    pub async fn save_medications(&self, medications: &[Medication]) -> AppResult<()> {
        self.set(&self.key(StoreKey::Medications), medications).await
    }

    pub async fn get_orders(&self) -> AppResult<Vec<Order>> {
        self.get_list_or_seed(StoreKey::Orders, || seed::orders(Utc::now()))
            .await
    }

    pub async fn save_orders(&self, orders: &[Order]) -> AppResult<()> {
        self.set(&self.key(StoreKey::Orders), orders).await
    }

    pub async fn get_profile(&self) -> AppResult<PharmacyProfile> {
        let key = self.key(StoreKey::Profile);
        if let Some(profile) = self.get::<PharmacyProfile>(&key).await {
            return Ok(profile);
        }
        let profile = seed::profile();
        tracing::info!(key = %key, "seeding default profile");
        self.set(&key, &profile).await?;
        Ok(profile)
    }

    pub async fn save_profile(&self, profile: &PharmacyProfile) -> AppResult<()> {
        self.set(&self.key(StoreKey::Profile), profile).await
    }

    pub async fn get_auth(&self) -> bool {
        self.get::<AuthFlag>(&self.key(StoreKey::Auth))
            .await
            .map(|flag| flag.logged_in)
            .unwrap_or(false)
    }

    pub async fn set_auth(&self, logged_in: bool) -> AppResult<()> {
        self.set(&self.key(StoreKey::Auth), &AuthFlag { logged_in })
            .await
    }

    pub async fn get_notifications(&self) -> AppResult<Vec<NotificationItem>> {
        self.get_list_or_seed(StoreKey::Notifications, || {
            seed::notifications(Utc::now())
        })
        .await
    }

    /// Prepend a notification and return the updated list.
    pub async fn add_notification(
        &self,
        notification: NotificationItem,
    ) -> AppResult<Vec<NotificationItem>> {
        let mut list = self.get_notifications().await?;
        list.insert(0, notification);
        self.set(&self.key(StoreKey::Notifications), &list).await?;
        Ok(list)
    }

    /// Drop every key under this store's prefix.
    pub async fn clear(&self) -> AppResult<()> {
        for key in StoreKey::ALL {
            self.remove(&self.key(key)).await?;
        }
        Ok(())
    }
}
