//! Session lifetime checks against a validated [`SessionConfiguration`].
//!
//! Session storage is outside this crate; callers pass the timestamps they
//! track and get back whether the session may still be used.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::SessionConfiguration;

/// Timestamps tracked for an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimes {
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
    /// The user opted into the extended remember-me lifetime.
    pub remember_me: bool,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionStateError {
    #[error("session has expired")]
    Expired,

    #[error("session has been inactive for too long")]
    Inactive,

    #[error("invalid session time window (last activity precedes creation)")]
    InvalidTimeWindow,
}

/// Absolute lifetime of a session.
///
/// Remember-me sessions use the remember-me duration when it parses to a
/// positive value. Anything else (`"0"`, an empty or unparsable string)
/// falls back to the plain expiration, so opting in never shortens a session.
pub fn session_lifetime(config: &SessionConfiguration, remember_me: bool) -> Duration {
    if !remember_me {
        return config.expiration;
    }

    match config.remember_me() {
        Ok(duration) if duration > Duration::zero() => duration,
        _ => config.expiration,
    }
}

/// Deterministically check whether a session is still valid at `now`.
///
/// Remember-me sessions are not subject to the inactivity timeout.
pub fn check_session(
    config: &SessionConfiguration,
    times: &SessionTimes,
    now: DateTime<Utc>,
) -> Result<(), SessionStateError> {
    if times.last_activity_at < times.created_at {
        return Err(SessionStateError::InvalidTimeWindow);
    }

    let lifetime = session_lifetime(config, times.remember_me);
    if now - times.created_at >= lifetime {
        return Err(SessionStateError::Expired);
    }

    if !times.remember_me
        && config.inactivity_enabled()
        && now - times.last_activity_at > config.inactivity
    {
        return Err(SessionStateError::Inactive);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn config() -> SessionConfiguration {
        SessionConfiguration {
            name: "warden_session".to_string(),
            expiration: Duration::hours(1),
            inactivity: Duration::minutes(5),
            remember_me_duration: "1M".to_string(),
            domain: "example.com".to_string(),
            ..SessionConfiguration::default()
        }
    }

    fn times(remember_me: bool, idle: Duration) -> SessionTimes {
        SessionTimes {
            created_at: t0(),
            last_activity_at: t0() + Duration::minutes(30) - idle,
            remember_me,
        }
    }

    #[test]
    fn active_session_is_valid() {
        let now = t0() + Duration::minutes(30);
        assert_eq!(check_session(&config(), &times(false, Duration::minutes(1)), now), Ok(()));
    }

    #[test]
    fn session_expires_at_absolute_lifetime() {
        let session = SessionTimes {
            created_at: t0(),
            last_activity_at: t0() + Duration::minutes(59),
            remember_me: false,
        };
        assert_eq!(
            check_session(&config(), &session, t0() + Duration::hours(1)),
            Err(SessionStateError::Expired)
        );
    }

    #[test]
    fn idle_session_is_rejected() {
        let now = t0() + Duration::minutes(30);
        assert_eq!(
            check_session(&config(), &times(false, Duration::minutes(6)), now),
            Err(SessionStateError::Inactive)
        );
    }

    #[test]
    fn zero_inactivity_disables_idle_check() {
        let config = SessionConfiguration {
            inactivity: Duration::zero(),
            ..config()
        };
        let now = t0() + Duration::minutes(30);
        assert_eq!(check_session(&config, &times(false, Duration::minutes(29)), now), Ok(()));
    }

    #[test]
    fn remember_me_extends_lifetime_and_skips_idle_check() {
        let session = SessionTimes {
            created_at: t0(),
            last_activity_at: t0(),
            remember_me: true,
        };
        let now = t0() + Duration::days(29);
        assert_eq!(check_session(&config(), &session, now), Ok(()));
        assert_eq!(
            check_session(&config(), &session, t0() + Duration::days(30)),
            Err(SessionStateError::Expired)
        );
    }

    #[test]
    fn non_positive_remember_me_falls_back_to_expiration() {
        for remember_me_duration in ["0", "", "later"] {
            let config = SessionConfiguration {
                remember_me_duration: remember_me_duration.to_string(),
                ..config()
            };
            let session = SessionTimes {
                created_at: t0(),
                last_activity_at: t0(),
                remember_me: true,
            };

            assert_eq!(session_lifetime(&config, true), config.expiration);
            assert_eq!(
                check_session(&config, &session, t0() + Duration::seconds(1)),
                Ok(()),
                "remember_me_duration {remember_me_duration:?}"
            );
            assert_eq!(
                check_session(&config, &session, t0() + Duration::hours(1)),
                Err(SessionStateError::Expired)
            );
        }
    }

    #[test]
    fn zero_remember_me_survives_validation_without_shortening_sessions() {
        let mut config = SessionConfiguration {
            remember_me_duration: "0".to_string(),
            expiration: Duration::zero(),
            ..config()
        };
        assert_eq!(crate::validate_session(&mut config), Ok(()));

        let session = SessionTimes {
            created_at: t0(),
            last_activity_at: t0(),
            remember_me: true,
        };
        assert_eq!(check_session(&config, &session, t0() + Duration::seconds(1)), Ok(()));
    }

    #[test]
    fn activity_before_creation_is_invalid() {
        let session = SessionTimes {
            created_at: t0(),
            last_activity_at: t0() - Duration::seconds(1),
            remember_me: false,
        };
        assert_eq!(
            check_session(&config(), &session, t0()),
            Err(SessionStateError::InvalidTimeWindow)
        );
    }
}
