use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication strength required to reach a domain.
///
/// This is a closed set: a configuration that names anything else is rejected
/// when the rule set is built, so a decision can never observe an unknown
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// The request is refused regardless of authentication state.
    Deny,
    /// No authentication is required.
    Bypass,
    /// First factor (username/password) is sufficient.
    #[serde(alias = "one_factor")]
    SingleFactor,
    /// A second factor (TOTP, U2F, push) is required.
    TwoFactor,
}

impl Policy {
    pub const ALL: [Policy; 4] = [
        Policy::Deny,
        Policy::Bypass,
        Policy::SingleFactor,
        Policy::TwoFactor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Deny => "deny",
            Policy::Bypass => "bypass",
            Policy::SingleFactor => "single_factor",
            Policy::TwoFactor => "two_factor",
        }
    }

    /// Rank in `deny < bypass < single_factor < two_factor`.
    ///
    /// Reported in decision explanations. Rule matching is first-match-wins
    /// and never compares ranks.
    pub fn rank(&self) -> u8 {
        match self {
            Policy::Deny => 0,
            Policy::Bypass => 1,
            Policy::SingleFactor => 2,
            Policy::TwoFactor => 3,
        }
    }

    pub fn requires_second_factor(&self) -> bool {
        matches!(self, Policy::TwoFactor)
    }
}

impl core::fmt::Display for Policy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown policy '{0}'")]
pub struct UnknownPolicy(pub String);

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deny" => Ok(Policy::Deny),
            "bypass" => Ok(Policy::Bypass),
            "single_factor" | "one_factor" => Ok(Policy::SingleFactor),
            "two_factor" => Ok(Policy::TwoFactor),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_round_trip_through_display() {
        for policy in Policy::ALL {
            assert_eq!(policy.as_str().parse::<Policy>(), Ok(policy));
        }
    }

    #[test]
    fn one_factor_is_an_alias() {
        assert_eq!("one_factor".parse::<Policy>(), Ok(Policy::SingleFactor));
        assert_eq!(Policy::SingleFactor.to_string(), "single_factor");
    }

    #[test]
    fn unknown_literals_are_rejected() {
        for literal in ["", "Deny", "TWO_FACTOR", "three_factor", " bypass"] {
            assert_eq!(
                literal.parse::<Policy>(),
                Err(UnknownPolicy(literal.to_string()))
            );
        }
    }

    #[test]
    fn ranks_follow_strength() {
        let ranks: Vec<u8> = Policy::ALL.iter().map(Policy::rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert!(Policy::TwoFactor.requires_second_factor());
        assert!(!Policy::SingleFactor.requires_second_factor());
    }

    #[test]
    fn serde_uses_snake_case_literals() {
        let json = serde_json::to_string(&Policy::TwoFactor).unwrap();
        assert_eq!(json, "\"two_factor\"");
        let parsed: Policy = serde_json::from_str("\"one_factor\"").unwrap();
        assert_eq!(parsed, Policy::SingleFactor);
    }
}
