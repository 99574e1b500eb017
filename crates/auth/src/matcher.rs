use std::sync::Arc;

/// Decides whether a rule's domain pattern covers a request domain.
///
/// Implementations must be total and deterministic: the authorizer calls this
/// once per rule, in order, and takes the first `true`.
pub trait DomainMatcher: Send + Sync {
    fn matches(&self, pattern: &str, domain: &str) -> bool;
}

impl<M> DomainMatcher for Arc<M>
where
    M: DomainMatcher + ?Sized,
{
    fn matches(&self, pattern: &str, domain: &str) -> bool {
        (**self).matches(pattern, domain)
    }
}

impl<M> DomainMatcher for &M
where
    M: DomainMatcher + ?Sized,
{
    fn matches(&self, pattern: &str, domain: &str) -> bool {
        (**self).matches(pattern, domain)
    }
}

/// Exact or `*.`-prefixed subdomain matching.
///
/// `*.example.com` matches `a.example.com` and `a.b.example.com` but not
/// `example.com` itself. Both sides are expected to be lower-cased already.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WildcardDomainMatcher;

impl DomainMatcher for WildcardDomainMatcher {
    fn matches(&self, pattern: &str, domain: &str) -> bool {
        if pattern == domain {
            return true;
        }

        match pattern.strip_prefix('*') {
            // suffix keeps its leading dot, so "xexample.com" cannot match
            Some(suffix) if suffix.starts_with('.') => {
                domain.len() > suffix.len() && domain.ends_with(suffix)
            }
            _ => false,
        }
    }
}
