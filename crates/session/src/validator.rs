//! Session configuration validation.
//!
//! Every check runs regardless of earlier failures. Defaults are written in
//! place; violations that cannot be fixed silently are collected.

use chrono::Duration;

use warden_core::{ConfigError, ConfigErrors, parse_duration_string};

use crate::config::{
    DEFAULT_REMEMBER_ME_DURATION, DEFAULT_SESSION_NAME, SessionConfiguration, default_expiration,
};

/// Normalize `config` and report every violation found.
///
/// On `Ok(())` the configuration is fully defaulted and safe to publish. On
/// `Err` the caller must refuse to start (or to apply the reload).
pub fn validate_session(config: &mut SessionConfiguration) -> Result<(), ConfigErrors> {
    let mut errors = ConfigErrors::new();
    validate_session_into(config, &mut errors);
    errors.into_result()
}

/// Like [`validate_session`], appending to an existing collector so several
/// configuration sections can be reported together.
pub fn validate_session_into(config: &mut SessionConfiguration, errors: &mut ConfigErrors) {
    let before = errors.len();

    if config.name.is_empty() {
        config.name = DEFAULT_SESSION_NAME.to_string();
    }

    if config.is_distributed() && config.secret.is_empty() {
        errors.push(ConfigError::SessionSecretRequired);
    }

    // Zero means "unset" and takes the default; only a negative value is an error.
    if config.expiration == Duration::zero() {
        config.expiration = default_expiration();
    } else if config.expiration < Duration::zero() {
        errors.push(ConfigError::SessionExpirationNotPositive);
    }

    if config.inactivity < Duration::zero() {
        errors.push(ConfigError::SessionInactivityNegative);
    }

    if config.remember_me_duration.is_empty() {
        config.remember_me_duration = DEFAULT_REMEMBER_ME_DURATION.to_string();
    } else if let Err(e) = parse_duration_string(&config.remember_me_duration) {
        errors.push(ConfigError::RememberMeDuration(e));
    }

    if config.domain.is_empty() {
        errors.push(ConfigError::SessionDomainRequired);
    }

    let found = errors.len() - before;
    if found > 0 {
        tracing::debug!(violations = found, "session configuration rejected");
    }
}
