//! Configuration error model.

use thiserror::Error;

use crate::duration::DurationParseError;

/// Result type used by configuration construction and validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A single configuration violation.
///
/// Every variant is fatal at load time: a gateway holding one of these must
/// refuse to start, or refuse to apply the reload that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A policy literal outside the closed set was supplied.
    #[error("invalid policy '{value}' for {location}")]
    InvalidPolicy { location: String, value: String },

    /// An access rule was declared without a domain.
    #[error("access control rule #{index} has an empty domain")]
    EmptyRuleDomain { index: usize },

    /// A distributed session store is configured but no secret was set.
    #[error("Set secret of the session object")]
    SessionSecretRequired,

    #[error("Set expiration of the session above 0")]
    SessionExpirationNotPositive,

    #[error("Set inactivity of the session to 0 or above")]
    SessionInactivityNegative,

    #[error("Error occurred parsing remember_me_duration string: {0}")]
    RememberMeDuration(#[source] DurationParseError),

    #[error("Set domain of the session object")]
    SessionDomainRequired,
}

impl ConfigError {
    pub fn invalid_policy(location: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            location: location.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of configuration violations.
///
/// Validators append to this instead of returning on the first failure, so a
/// single load attempt reports every problem at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: ConfigError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ConfigError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ConfigError] {
        &self.0
    }

    /// Human-readable messages, in the order the violations were found.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// `Ok(())` when nothing was collected, otherwise the collection itself.
    pub fn into_result(self) -> Result<(), ConfigErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl core::fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            core::fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

impl From<ConfigError> for ConfigErrors {
    fn from(value: ConfigError) -> Self {
        Self(vec![value])
    }
}

impl<'a> IntoIterator for &'a ConfigErrors {
    type Item = &'a ConfigError;
    type IntoIter = core::slice::Iter<'a, ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
