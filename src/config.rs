use std::env;

use crate::store::SeedPolicy;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://delymed.db?mode=rwc";
pub const DEFAULT_KEY_PREFIX: &str = "delymed";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub key_prefix: String,
    pub seed_policy: SeedPolicy,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(1);
        let key_prefix = env::var("STORE_KEY_PREFIX")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string());
        let seed_policy = match env::var("STORE_RESEED_EMPTY") {
            Ok(value) => parse_seed_policy(&value)?,
            Err(_) => SeedPolicy::default(),
        };
        Ok(Self {
            database_url,
            max_connections,
            key_prefix,
            seed_policy,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 1,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

fn parse_seed_policy(value: &str) -> anyhow::Result<SeedPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(SeedPolicy::AbsentOrEmpty),
        "0" | "false" | "no" => Ok(SeedPolicy::Absent),
        other => Err(anyhow::anyhow!("invalid STORE_RESEED_EMPTY value: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_policy_accepts_boolean_spellings() {
        assert_eq!(parse_seed_policy("TRUE").unwrap(), SeedPolicy::AbsentOrEmpty);
        assert_eq!(parse_seed_policy(" no ").unwrap(), SeedPolicy::Absent);
        assert!(parse_seed_policy("sometimes").is_err());
    }
}
