//! `warden-auth`: access-control decisions for the gateway.
//!
//! Pure and transport-agnostic: given a validated [`RuleSet`] and a request
//! domain, produce the [`Policy`] the request must satisfy.

pub mod authorize;
pub mod matcher;
pub mod policy;
pub mod rule;

pub use authorize::{Authorizer, DecisionExplanation, MatchedRule, RuleSet};
pub use matcher::{DomainMatcher, WildcardDomainMatcher};
pub use policy::{Policy, UnknownPolicy};
pub use rule::{AccessControlConfiguration, AccessRule, AccessRuleConfiguration, DomainPattern};
