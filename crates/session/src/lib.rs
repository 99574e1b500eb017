//! `warden-session`: session lifecycle configuration.
//!
//! Validation normalizes the configuration in place and collects every
//! violation; lifetime checks evaluate sessions against the result.

pub mod config;
pub mod lifetime;
pub mod validator;

pub use config::{
    DEFAULT_EXPIRATION_SECS, DEFAULT_REMEMBER_ME_DURATION, DEFAULT_SESSION_NAME,
    RedisSessionConfiguration, SessionConfiguration, default_expiration,
};
pub use lifetime::{SessionStateError, SessionTimes, check_session, session_lifetime};
pub use validator::{validate_session, validate_session_into};
