//! `warden-core`: configuration primitives shared by the gateway crates.
//!
//! This crate has no knowledge of policies or sessions; it only carries the
//! error model and the duration-string grammar used across configuration.

pub mod duration;
pub mod error;

pub use duration::{DurationParseError, parse_duration_string};
pub use error::{ConfigError, ConfigErrors, ConfigResult};
