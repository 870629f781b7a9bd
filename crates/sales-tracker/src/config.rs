//! # Configuration
//!
//! Everything the system needs at start-up, read from the environment. The binary
//! loads `variables.env` through `dotenv` first, so the file and real environment
//! variables are interchangeable.
//!
//! | Variable | Default |
//! |---|---|
//! | `TRACKER_JWT_SECRET` | required, at least 32 bytes |
//! | `TRACKER_TOKEN_TTL_HOURS` | `24` |
//! | `TRACKER_JWT_ISSUER` | `sales-tracker` |
//! | `TRACKER_CHANNEL_CAPACITY` | `32` |
//! | `TRACKER_TOP_CLIENTS` | `10` |
//! | `TRACKER_TOP_SELLERS` | `3` |

use crate::reports::{DEFAULT_TOP_CLIENTS, DEFAULT_TOP_SELLERS};
use chrono::Duration;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
pub const DEFAULT_ISSUER: &str = "sales-tracker";
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("TRACKER_JWT_SECRET must be at least {min} bytes, got {len}")]
    SecretTooShort { len: usize, min: usize },
}

/// Token signing settings handed to the identity service.
#[derive(Clone)]
pub struct IdentityConfig {
    /// HMAC key for HS256.
    pub secret: String,
    pub token_ttl: Duration,
    pub issuer: String,
}

impl IdentityConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort {
                len: secret.len(),
                min: MIN_SECRET_LEN,
            });
        }
        Ok(Self {
            secret,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            issuer: DEFAULT_ISSUER.to_string(),
        })
    }
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Mailbox size of every resource actor.
    pub channel_capacity: usize,
    pub identity: IdentityConfig,
    /// Leaderboard sizes used when the caller does not pass one.
    pub top_clients: usize,
    pub top_sellers: usize,
}

impl TrackerConfig {
    /// Defaults everywhere except the signing secret.
    pub fn with_secret(secret: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            identity: IdentityConfig::new(secret)?,
            top_clients: DEFAULT_TOP_CLIENTS,
            top_sellers: DEFAULT_TOP_SELLERS,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret =
            lookup("TRACKER_JWT_SECRET").ok_or(ConfigError::Missing("TRACKER_JWT_SECRET"))?;
        let mut config = Self::with_secret(secret)?;

        if let Some(hours) = parse::<i64>(&lookup, "TRACKER_TOKEN_TTL_HOURS")? {
            config.identity.token_ttl = Duration::try_hours(hours)
                .filter(|_| hours > 0)
                .ok_or_else(|| {
                    invalid(
                        "TRACKER_TOKEN_TTL_HOURS",
                        hours,
                        "must be a positive number of hours",
                    )
                })?;
        }
        if let Some(issuer) = lookup("TRACKER_JWT_ISSUER") {
            config.identity.issuer = issuer;
        }
        if let Some(capacity) = parse::<usize>(&lookup, "TRACKER_CHANNEL_CAPACITY")? {
            if capacity == 0 {
                return Err(invalid("TRACKER_CHANNEL_CAPACITY", capacity, "must be positive"));
            }
            config.channel_capacity = capacity;
        }
        if let Some(top) = parse(&lookup, "TRACKER_TOP_CLIENTS")? {
            config.top_clients = top;
        }
        if let Some(top) = parse(&lookup, "TRACKER_TOP_SELLERS")? {
            config.top_sellers = top;
        }
        Ok(config)
    }
}

fn invalid(key: &'static str, value: impl ToString, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| invalid(key, &raw, &e.to_string())),
    }
}
