//! Profile tag classification.
//!
//! Responsibilities:
//! - Derive the environment class and feature flags from the ordered list
//!   of active profile tags.
//!
//! Does NOT handle:
//! - Enumerating the active profiles (the host supplies them).
//! - Producing default properties (see the `composer` module).
//!
//! Invariants:
//! - Tags are matched case-sensitively, in input order.
//! - The LAST environment tag wins: `development,test,production` resolves
//!   to `Production`.
//! - Flag tags OR-accumulate; a later tag never clears an earlier flag.
//! - Unrecognized tags are ignored, keeping the tag set open-ended.

use crate::constants::{
    TAG_CLOUD, TAG_CONFIG, TAG_DEVELOPMENT, TAG_DISCOVERY, TAG_PRODUCTION, TAG_TEST_PREFIX,
};
use crate::types::{EnvClass, FeatureFlags};

/// Result of classifying the active profile tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    /// The single environment class the service runs in.
    pub env: EnvClass,
    /// Independent feature toggles.
    pub flags: FeatureFlags,
}

/// Classify the active profile tags in input order.
///
/// Environment tags overwrite one another, so the last one wins; flag tags
/// only ever set bits. Duplicate and unrecognized tags are allowed.
pub fn classify<I>(tags: I) -> Classification
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut env = EnvClass::Unset;
    let mut flags = FeatureFlags::empty();

    for tag in tags {
        match tag.as_ref() {
            TAG_DEVELOPMENT => env = EnvClass::Development,
            TAG_PRODUCTION => env = EnvClass::Production,
            tag if tag.starts_with(TAG_TEST_PREFIX) => env = EnvClass::Test,
            TAG_DISCOVERY => flags |= FeatureFlags::DISCOVERY,
            TAG_CONFIG => flags |= FeatureFlags::REMOTE_CONFIG,
            TAG_CLOUD => flags |= FeatureFlags::DISCOVERY | FeatureFlags::REMOTE_CONFIG,
            _ => {}
        }
    }

    tracing::debug!(env = ?env, flags = ?flags, "classified active profiles");

    Classification { env, flags }
}
