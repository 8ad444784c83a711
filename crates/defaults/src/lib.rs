//! Profile-driven configuration defaults for keel services.
//!
//! Given the ordered list of profile tags active at startup, this crate
//! derives the environment class and feature flags, composes the matching
//! default properties in fixed layer order, and hands back a flat mapping
//! for the caller to register at the lowest override priority. Text values
//! may carry `${...}` references for the host's interpolation engine; they
//! are never resolved here.

pub mod constants;

mod classifier;
mod composer;
mod register;
mod types;

pub use classifier::{Classification, classify};
pub use composer::{ResolvedDefaults, compose, defaults_for_profiles};
pub use register::RegisterError;
pub use types::{EnvClass, FeatureFlags, PropertyValue};
