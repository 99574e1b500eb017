//! Top-level gateway configuration, as handed over by the loader.

use serde::{Deserialize, Serialize};

use warden_auth::AccessControlConfiguration;
use warden_session::SessionConfiguration;

pub const DEFAULT_TOTP_PERIOD: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfiguration {
    pub access_control: AccessControlConfiguration,
    pub session: SessionConfiguration,
    pub totp: Option<TotpConfiguration>,
    pub duo_api: Option<DuoApiConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotpConfiguration {
    /// Seconds per code; `None` or `0` takes [`DEFAULT_TOTP_PERIOD`].
    pub period: Option<u64>,
}

/// Duo push API credentials. Presence enables the `mobile_push` method.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuoApiConfiguration {
    pub hostname: String,
    pub integration_key: String,
    pub secret_key: String,
}

impl core::fmt::Debug for DuoApiConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DuoApiConfiguration")
            .field("hostname", &self.hostname)
            .field("integration_key", &self.integration_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
