use serde::Serialize;

use warden_core::{ConfigError, ConfigResult};

use crate::{
    AccessControlConfiguration, AccessRule, DomainMatcher, DomainPattern, Policy,
    WildcardDomainMatcher,
};

/// Ordered access-control rules plus the policy applied when none match.
///
/// A `RuleSet` is immutable once built and is only ever replaced wholesale, so
/// it can be shared across request handlers without locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    default_policy: Policy,
    rules: Vec<AccessRule>,
}

impl RuleSet {
    pub fn new(default_policy: Policy, rules: Vec<AccessRule>) -> Self {
        Self {
            default_policy,
            rules,
        }
    }

    /// Build a rule set from its configuration section.
    ///
    /// Fails on the first unknown policy literal or empty rule domain. There is
    /// no partially valid rule set, so errors are not aggregated here.
    pub fn from_config(config: &AccessControlConfiguration) -> ConfigResult<Self> {
        let default_policy = config
            .default_policy
            .parse::<Policy>()
            .map_err(|e| ConfigError::invalid_policy("default_policy", e.0))?;

        let rules = config
            .rules
            .iter()
            .enumerate()
            .map(|(index, raw)| -> ConfigResult<AccessRule> {
                let domain = DomainPattern::new(&raw.domain)
                    .ok_or(ConfigError::EmptyRuleDomain { index })?;
                let policy = raw.policy.parse::<Policy>().map_err(|e| {
                    ConfigError::invalid_policy(format!("rule #{index} ({domain})"), e.0)
                })?;
                Ok(AccessRule::new(domain, policy))
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(Self::new(default_policy, rules))
    }

    pub fn default_policy(&self) -> Policy {
        self.default_policy
    }

    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }

    /// Policy for `domain` using exact/wildcard matching.
    pub fn decide(&self, domain: &str) -> Policy {
        self.decide_with(&WildcardDomainMatcher, domain)
    }

    /// Policy of the first rule whose pattern matches `domain`, otherwise the
    /// default policy.
    pub fn decide_with<M>(&self, matcher: &M, domain: &str) -> Policy
    where
        M: DomainMatcher + ?Sized,
    {
        self.first_match(matcher, domain)
            .map_or(self.default_policy, |(_, rule)| rule.policy())
    }

    /// Whether two-factor is required by the default policy or by any rule.
    ///
    /// This is an existential scan over configured policies; it does not
    /// enumerate domains, so a two-factor rule shadowed by an earlier rule
    /// still counts.
    pub fn requires_second_factor_anywhere(&self) -> bool {
        self.default_policy.requires_second_factor()
            || self.rules.iter().any(|r| r.policy().requires_second_factor())
    }

    fn first_match<M>(&self, matcher: &M, domain: &str) -> Option<(usize, &AccessRule)>
    where
        M: DomainMatcher + ?Sized,
    {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| matcher.matches(rule.domain().as_str(), domain))
    }
}

impl TryFrom<&AccessControlConfiguration> for RuleSet {
    type Error = ConfigError;

    fn try_from(value: &AccessControlConfiguration) -> Result<Self, Self::Error> {
        Self::from_config(value)
    }
}

impl TryFrom<AccessControlConfiguration> for RuleSet {
    type Error = ConfigError;

    fn try_from(value: AccessControlConfiguration) -> Result<Self, Self::Error> {
        Self::from_config(&value)
    }
}

/// A rule set bound to the matcher used to evaluate it.
#[derive(Debug, Clone)]
pub struct Authorizer<M = WildcardDomainMatcher> {
    rules: RuleSet,
    matcher: M,
}

impl Authorizer {
    pub fn new(rules: RuleSet) -> Self {
        Self::with_matcher(rules, WildcardDomainMatcher)
    }

    pub fn from_config(config: &AccessControlConfiguration) -> ConfigResult<Self> {
        RuleSet::from_config(config).map(Self::new)
    }
}

impl<M: DomainMatcher> Authorizer<M> {
    pub fn with_matcher(rules: RuleSet, matcher: M) -> Self {
        Self { rules, matcher }
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    /// Authentication strength required for a request to `domain`.
    ///
    /// `domain` is expected to be normalized (lower-cased, no port) by the caller.
    pub fn decide(&self, domain: &str) -> Policy {
        let policy = self.rules.decide_with(&self.matcher, domain);
        tracing::debug!(domain, policy = %policy, "access decision");
        policy
    }

    pub fn requires_second_factor_anywhere(&self) -> bool {
        self.rules.requires_second_factor_anywhere()
    }

    /// Explain which rule (if any) produced the decision for `domain`.
    ///
    /// The returned policy is always the one [`Authorizer::decide`] returns.
    pub fn explain_decision(&self, domain: &str) -> DecisionExplanation {
        match self.rules.first_match(&self.matcher, domain) {
            Some((index, rule)) => DecisionExplanation {
                domain: domain.to_string(),
                policy: rule.policy(),
                strength: rule.policy().rank(),
                reason: format!(
                    "rule #{index} ({}) is the first rule matching '{domain}'",
                    rule.domain()
                ),
                matched_rule: Some(MatchedRule {
                    index,
                    pattern: rule.domain().as_str().to_string(),
                    wildcard: rule.domain().is_wildcard(),
                }),
            },
            None => DecisionExplanation {
                domain: domain.to_string(),
                policy: self.rules.default_policy(),
                strength: self.rules.default_policy().rank(),
                reason: format!(
                    "no rule matches '{domain}'; default policy '{}' applies",
                    self.rules.default_policy()
                ),
                matched_rule: None,
            },
        }
    }
}

/// Auditable record of an access decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionExplanation {
    pub domain: String,
    pub policy: Policy,
    /// [`Policy::rank`] of `policy`, for audit sinks that aggregate by strength.
    pub strength: u8,
    pub reason: String,
    /// `None` when the default policy applied.
    pub matched_rule: Option<MatchedRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedRule {
    /// Position in the configured rule order.
    pub index: usize,
    pub pattern: String,
    /// The pattern is `*.`-prefixed and only matched a subdomain.
    pub wildcard: bool,
}
