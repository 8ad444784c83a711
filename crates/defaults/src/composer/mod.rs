//! Default property composition.
//!
//! Responsibilities:
//! - Merge the common, environment, and feature-derived layers into one
//!   flat mapping in fixed precedence order.
//! - Define `ResolvedDefaults`, the composed output handed to the caller.
//!
//! Does NOT handle:
//! - Profile tag parsing (see the `classifier` module).
//! - Placeholder interpolation or priority against other sources (the
//!   caller registers the mapping at the lowest priority; see `register`).
//!
//! Invariants:
//! - Layers apply in order: common, environment, feature-derived; a later
//!   layer overwrites earlier keys (exact, case-sensitive match).
//! - A key is either present with a real value or entirely absent, never
//!   present with an empty sentinel.
//! - Composition is pure: identical inputs produce identical mappings.

mod layers;

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::classifier::{Classification, classify};
use crate::constants::{DEFAULT_DEV_PASSWORD, DEFAULT_USER};
use crate::types::{EnvClass, FeatureFlags, PropertyValue};

use layers::PropertyLayer;

/// The composed default mapping for one startup.
///
/// Entries iterate in key order. Text values may still contain `${...}`
/// references; they are resolved later, against the fully merged
/// configuration, by the host's interpolation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedDefaults {
    entries: BTreeMap<String, PropertyValue>,
}

impl ResolvedDefaults {
    /// Look up a composed default by its exact key.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    /// Whether a default exists for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of composed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Apply one layer on top of the entries collected so far.
    fn apply(&mut self, layer: PropertyLayer) {
        for (key, value) in layer {
            self.entries.insert(key.to_string(), value);
        }
    }
}

impl IntoIterator for ResolvedDefaults {
    type Item = (String, PropertyValue);
    type IntoIter = btree_map::IntoIter<String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Compose the default properties for one startup.
///
/// Applies the common layer, then the environment layer selected by `env`
/// (development, or the standard layer for everything else including
/// `Unset`), then the feature-derived layer. Each layer overwrites keys
/// already set by an earlier one.
pub fn compose(env: EnvClass, flags: FeatureFlags) -> ResolvedDefaults {
    let mut defaults = ResolvedDefaults::default();

    defaults.apply(layers::common_layer());
    if env.is_development() {
        defaults.apply(layers::development_layer());
    } else {
        defaults.apply(layers::standard_layer());
    }
    defaults.apply(feature_layer(env, flags));

    tracing::debug!(entries = defaults.len(), "composed default properties");

    defaults
}

/// Classify `tags` and compose the matching defaults in one step.
pub fn defaults_for_profiles<I>(tags: I) -> ResolvedDefaults
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let Classification { env, flags } = classify(tags);
    compose(env, flags)
}

/// Build the computed feature layer.
///
/// The flag booleans are always emitted, even when false, so the flag state
/// is observable and overridable. The remote-config credential pair is
/// emitted only when remote config is enabled in development; in every
/// other case the keys stay absent, so a downstream `${...}` reference to
/// them surfaces unresolved instead of silently blank.
fn feature_layer(env: EnvClass, flags: FeatureFlags) -> PropertyLayer {
    let remote_config = flags.remote_config_enabled();

    let mut layer: PropertyLayer = vec![
        ("discovery.enabled", flags.discovery_enabled().into()),
        ("remote_config.enabled", remote_config.into()),
        ("remote_config.discovery.enabled", remote_config.into()),
    ];
    if remote_config {
        layer.push(("remote_config.fail_fast", true.into()));
        if env.is_development() {
            layer.push(("remote_config.username", DEFAULT_USER.into()));
            layer.push(("remote_config.password", DEFAULT_DEV_PASSWORD.into()));
        }
    }
    layer
}
