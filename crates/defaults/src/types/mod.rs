//! Core type definitions for profile classification and default composition.
//!
//! Responsibilities:
//! - Define the environment class, feature flags, and property value types
//!   shared by the classifier and the composer.
//!
//! Does NOT handle:
//! - Deriving these values from profile tags (see the `classifier` module).
//! - Building or merging property layers (see the `composer` module).

mod env;
mod flags;
mod value;

pub use env::EnvClass;
pub use flags::FeatureFlags;
pub use value::PropertyValue;
