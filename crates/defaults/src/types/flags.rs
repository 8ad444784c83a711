//! Feature flags derived from active profile tags.
//!
//! Responsibilities:
//! - Define the independent feature toggles a profile list can enable.
//!
//! Does NOT handle:
//! - Tag parsing (see the `classifier` module).
//! - Emitting the flag state as properties (see the `composer` module).
//!
//! Invariants:
//! - Flags OR-accumulate: once a tag sets a bit, no later tag clears it.
//! - The `cloud` tag sets both bits and has no bit of its own.

use bitflags::bitflags;

bitflags! {
    /// Independent feature toggles enabled by profile tags.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct FeatureFlags: u8 {
        /// Register with the service registry and discover peers.
        const DISCOVERY = 1 << 0;
        /// Pull configuration from the remote config service.
        const REMOTE_CONFIG = 1 << 1;
    }
}

impl FeatureFlags {
    /// Whether the service registers with the discovery registry.
    pub fn discovery_enabled(self) -> bool {
        self.contains(FeatureFlags::DISCOVERY)
    }

    /// Whether the service pulls configuration from the remote config service.
    pub fn remote_config_enabled(self) -> bool {
        self.contains(FeatureFlags::REMOTE_CONFIG)
    }
}
