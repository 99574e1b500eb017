//! Session configuration section.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use warden_core::{DurationParseError, parse_duration_string};

pub const DEFAULT_SESSION_NAME: &str = "warden_session";
pub const DEFAULT_EXPIRATION_SECS: i64 = 3600;
pub const DEFAULT_REMEMBER_ME_DURATION: &str = "1M";

/// Absolute session lifetime applied when none is configured (one hour).
pub fn default_expiration() -> Duration {
    Duration::seconds(DEFAULT_EXPIRATION_SECS)
}

/// Session lifecycle parameters.
///
/// Fields left at their zero value are "unset"; [`crate::validate_session`]
/// replaces the ones that have defaults and reports the ones that are
/// required. Once validated the value is treated as immutable until the next
/// configuration load.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfiguration {
    /// Session cookie name.
    pub name: String,
    /// Only required when a distributed store ([`Self::redis`]) is configured.
    pub secret: String,
    /// Absolute lifetime from creation, in seconds on the wire.
    #[serde(with = "duration_seconds")]
    pub expiration: Duration,
    /// Maximum idle time; zero disables the inactivity timeout.
    #[serde(with = "duration_seconds")]
    pub inactivity: Duration,
    /// Duration string, e.g. `1M` or `2w`.
    pub remember_me_duration: String,
    /// Cookie scope domain. Required.
    pub domain: String,
    pub redis: Option<RedisSessionConfiguration>,
}

impl Default for SessionConfiguration {
    fn default() -> Self {
        Self {
            name: String::new(),
            secret: String::new(),
            expiration: Duration::zero(),
            inactivity: Duration::zero(),
            remember_me_duration: String::new(),
            domain: String::new(),
            redis: None,
        }
    }
}

impl SessionConfiguration {
    /// Whether sessions are shared through a distributed store.
    pub fn is_distributed(&self) -> bool {
        self.redis.is_some()
    }

    pub fn inactivity_enabled(&self) -> bool {
        self.inactivity > Duration::zero()
    }

    /// Parsed remember-me duration.
    pub fn remember_me(&self) -> Result<Duration, DurationParseError> {
        parse_duration_string(&self.remember_me_duration)
    }
}

impl core::fmt::Debug for SessionConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionConfiguration")
            .field("name", &self.name)
            .field("secret", &redacted(&self.secret))
            .field("expiration", &self.expiration)
            .field("inactivity", &self.inactivity)
            .field("remember_me_duration", &self.remember_me_duration)
            .field("domain", &self.domain)
            .field("redis", &self.redis)
            .finish()
    }
}

/// Connection details of the distributed session store.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisSessionConfiguration {
    pub host: String,
    pub port: u16,
    pub password: String,
    pub database_index: u32,
}

impl core::fmt::Debug for RedisSessionConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RedisSessionConfiguration")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &redacted(&self.password))
            .field("database_index", &self.database_index)
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "<redacted>" }
}

/// Whole seconds, signed so a negative value survives to validation.
mod duration_seconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Duration::try_seconds(secs).ok_or_else(|| D::Error::custom("duration out of range"))
    }
}
