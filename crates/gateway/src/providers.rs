//! Provider registry: the currently published configuration snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use warden_auth::Policy;
use warden_core::ConfigErrors;

use crate::{ConfigSnapshot, GatewayConfiguration};

/// Holds the live [`ConfigSnapshot`] and swaps it atomically on reload.
///
/// Readers clone the inner `Arc` and keep a consistent view for as long as
/// they hold it, even if a reload lands in the meantime.
#[derive(Debug)]
pub struct Providers {
    current: RwLock<Arc<ConfigSnapshot>>,
}

impl Providers {
    /// Validate the initial configuration. A gateway must not start on `Err`.
    pub fn new(config: GatewayConfiguration) -> Result<Self, ConfigErrors> {
        let snapshot = ConfigSnapshot::build(config).inspect_err(|errors| {
            tracing::error!(violations = errors.len(), %errors, "invalid initial configuration");
        })?;

        tracing::info!(revision = 1, "configuration applied");
        Ok(Self {
            current: RwLock::new(Arc::new(snapshot.with_revision(1))),
        })
    }

    /// Snapshot currently in force.
    pub fn snapshot(&self) -> Arc<ConfigSnapshot> {
        // The snapshot itself is immutable, so a poisoned lock still guards
        // a consistent value.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Build a snapshot from `config` and publish it.
    ///
    /// On failure nothing is swapped: the last-known-good snapshot keeps
    /// serving and every violation is returned. On success returns the new
    /// revision.
    pub fn reload(&self, config: GatewayConfiguration) -> Result<u64, ConfigErrors> {
        let snapshot = match ConfigSnapshot::build(config) {
            Ok(snapshot) => snapshot,
            Err(errors) => {
                tracing::warn!(
                    revision = self.snapshot().revision(),
                    violations = errors.len(),
                    %errors,
                    "configuration reload rejected; keeping current configuration"
                );
                return Err(errors);
            }
        };

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let revision = guard.revision() + 1;
        *guard = Arc::new(snapshot.with_revision(revision));
        drop(guard);

        tracing::info!(revision, "configuration applied");
        Ok(revision)
    }

    /// Policy for `domain` under the current snapshot.
    pub fn decide(&self, domain: &str) -> Policy {
        self.snapshot().authorizer().decide(domain)
    }
}
