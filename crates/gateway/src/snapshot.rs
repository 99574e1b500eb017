//! Immutable, validated configuration shared by request handlers.

use warden_auth::Authorizer;
use warden_core::ConfigErrors;
use warden_session::{SessionConfiguration, validate_session_into};

use crate::config::{DEFAULT_TOTP_PERIOD, DuoApiConfiguration, GatewayConfiguration};

/// Everything a request handler needs, validated once per load.
///
/// Built from a [`GatewayConfiguration`] and never mutated afterwards;
/// reloads build a new snapshot instead.
#[derive(Debug, Clone)]
pub struct ConfigSnapshot {
    revision: u64,
    authorizer: Authorizer,
    session: SessionConfiguration,
    totp_period: u64,
    duo_api: Option<DuoApiConfiguration>,
}

impl ConfigSnapshot {
    /// Validate `config` and build a snapshot from it.
    ///
    /// Every section is checked on each attempt and all violations are
    /// returned together, access control first.
    pub fn build(mut config: GatewayConfiguration) -> Result<Self, ConfigErrors> {
        let mut errors = ConfigErrors::new();

        let authorizer = Authorizer::from_config(&config.access_control);
        if let Err(e) = &authorizer {
            errors.push(e.clone());
        }

        validate_session_into(&mut config.session, &mut errors);

        // Zero means "unset", as for session expiration.
        let totp_period = match config.totp.as_ref().and_then(|t| t.period) {
            None | Some(0) => DEFAULT_TOTP_PERIOD,
            Some(period) => period,
        };

        match authorizer {
            Ok(authorizer) if errors.is_empty() => Ok(Self {
                revision: 0,
                authorizer,
                session: config.session,
                totp_period,
                duo_api: config.duo_api,
            }),
            _ => Err(errors),
        }
    }

    pub(crate) fn with_revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    /// Position of this snapshot in the sequence of applied configurations.
    /// Zero for a snapshot that was never published.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn authorizer(&self) -> &Authorizer {
        &self.authorizer
    }

    pub fn session(&self) -> &SessionConfiguration {
        &self.session
    }

    pub fn totp_period(&self) -> u64 {
        self.totp_period
    }

    pub fn duo_api(&self) -> Option<&DuoApiConfiguration> {
        self.duo_api.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TotpConfiguration;
    use warden_auth::{AccessControlConfiguration, AccessRuleConfiguration, Policy};
    use warden_core::ConfigError;

    fn valid_config() -> GatewayConfiguration {
        GatewayConfiguration {
            access_control: AccessControlConfiguration {
                default_policy: "deny".to_string(),
                rules: vec![AccessRuleConfiguration::new("*.example.com", "two_factor")],
            },
            session: SessionConfiguration {
                domain: "example.com".to_string(),
                ..SessionConfiguration::default()
            },
            totp: None,
            duo_api: None,
        }
    }

    #[test]
    fn builds_normalized_snapshot() {
        let snapshot = ConfigSnapshot::build(valid_config()).unwrap();

        assert_eq!(snapshot.revision(), 0);
        assert_eq!(snapshot.authorizer().decide("app.example.com"), Policy::TwoFactor);
        assert_eq!(snapshot.session().name, "warden_session");
        assert_eq!(snapshot.totp_period(), DEFAULT_TOTP_PERIOD);
        assert!(snapshot.duo_api().is_none());
    }

    #[test]
    fn reports_every_section_together() {
        let mut config = valid_config();
        config.access_control.default_policy = "maybe".to_string();
        config.session.domain.clear();
        config.session.inactivity = chrono::Duration::seconds(-1);

        let errors = ConfigSnapshot::build(config).unwrap_err();
        assert_eq!(
            errors.as_slice(),
            &[
                ConfigError::invalid_policy("default_policy", "maybe"),
                ConfigError::SessionInactivityNegative,
                ConfigError::SessionDomainRequired,
            ]
        );
    }

    #[test]
    fn zero_totp_period_takes_default() {
        let mut config = valid_config();
        config.totp = Some(TotpConfiguration { period: Some(0) });

        let snapshot = ConfigSnapshot::build(config).unwrap();
        assert_eq!(snapshot.totp_period(), DEFAULT_TOTP_PERIOD);
    }

    #[test]
    fn session_errors_alone_reject_the_snapshot() {
        let mut config = valid_config();
        config.session.inactivity = chrono::Duration::seconds(-5);

        let errors = ConfigSnapshot::build(config).unwrap_err();
        assert_eq!(errors.as_slice(), &[ConfigError::SessionInactivityNegative]);
    }

    #[test]
    fn configured_totp_period_is_kept() {
        let mut config = valid_config();
        config.totp = Some(TotpConfiguration { period: Some(60) });
        assert_eq!(ConfigSnapshot::build(config).unwrap().totp_period(), 60);
    }
}
