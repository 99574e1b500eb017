//! Capability discovery: which second-factor methods the portal should offer.

use serde::Serialize;

use crate::ConfigSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondFactorMethod {
    Totp,
    U2f,
    MobilePush,
}

impl SecondFactorMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecondFactorMethod::Totp => "totp",
            SecondFactorMethod::U2f => "u2f",
            SecondFactorMethod::MobilePush => "mobile_push",
        }
    }
}

impl core::fmt::Display for SecondFactorMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the extended configuration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedConfiguration {
    pub available_methods: Vec<SecondFactorMethod>,
    /// Whether any configured policy demands a second factor.
    pub second_factor_enabled: bool,
    pub totp_period: u64,
}

/// Combine the enabled second-factor methods with the authorizer's
/// deployment-wide two-factor requirement.
pub fn extended_configuration(snapshot: &ConfigSnapshot) -> ExtendedConfiguration {
    let mut available_methods = vec![SecondFactorMethod::Totp, SecondFactorMethod::U2f];
    if snapshot.duo_api().is_some() {
        available_methods.push(SecondFactorMethod::MobilePush);
    }

    ExtendedConfiguration {
        available_methods,
        second_factor_enabled: snapshot.authorizer().requires_second_factor_anywhere(),
        totp_period: snapshot.totp_period(),
    }
}
