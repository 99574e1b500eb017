use serde::{Deserialize, Serialize};

use crate::Policy;

/// Domain pattern a rule is scoped to (`example.com` or `*.example.com`).
///
/// Always non-empty, trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DomainPattern(String);

impl DomainPattern {
    /// Normalize `raw`; `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_ascii_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.starts_with("*.")
    }
}

impl core::fmt::Display for DomainPattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated access-control rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRule {
    domain: DomainPattern,
    policy: Policy,
}

impl AccessRule {
    pub fn new(domain: DomainPattern, policy: Policy) -> Self {
        Self { domain, policy }
    }

    pub fn domain(&self) -> &DomainPattern {
        &self.domain
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }
}

/// Access-control section as it appears in configuration, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessControlConfiguration {
    pub default_policy: String,
    pub rules: Vec<AccessRuleConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessRuleConfiguration {
    pub domain: String,
    pub policy: String,
}

impl AccessRuleConfiguration {
    pub fn new(domain: impl Into<String>, policy: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            policy: policy.into(),
        }
    }
}
