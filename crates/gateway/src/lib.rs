//! `warden-gateway`: wires access control and session configuration into
//! the snapshot that request handlers consult.
//!
//! HTTP routing is not part of this crate; handlers call into
//! [`Providers`] and [`extended_configuration`].

pub mod capabilities;
pub mod config;
pub mod providers;
pub mod snapshot;

pub use capabilities::{ExtendedConfiguration, SecondFactorMethod, extended_configuration};
pub use config::{DEFAULT_TOTP_PERIOD, DuoApiConfiguration, GatewayConfiguration, TotpConfiguration};
pub use providers::Providers;
pub use snapshot::ConfigSnapshot;
