//! Literal property layers.
//!
//! Responsibilities:
//! - Build the common, development, and standard (non-development) layer
//!   tables.
//!
//! Does NOT handle:
//! - Merge order or the computed feature layer (see the parent module).
//!
//! Invariants:
//! - Tables are built fresh on every call; nothing here is global state.
//! - Text values may reference other keys (`${...}` syntax) and are emitted
//!   verbatim for the host's interpolation engine, including references to
//!   keys this crate never defines (`service.name`, `net.hostname`,
//!   `http.port`, `working.dir`).

use crate::constants::{
    DEFAULT_DEV_PASSWORD, DEFAULT_USER, DEV_HEARTBEAT_INTERVAL_SECS, DEV_LOG_DIRECTORY,
    MANAGEMENT_BASE_PATH, PASSWORD_MUST_OVERRIDE, RUNTIME_LOG_DIRECTORY,
};
use crate::types::PropertyValue;

/// One named layer: ordered key/value pairs. Later layers win on conflict.
pub(crate) type PropertyLayer = Vec<(&'static str, PropertyValue)>;

/// Defaults applied in every environment.
pub(crate) fn common_layer() -> PropertyLayer {
    vec![
        // Identity
        ("info.service", "${service.name}".into()),
        ("info.instance", "${keel.instance.name}".into()),
        ("management.base_path", MANAGEMENT_BASE_PATH.into()),
        (
            "keel.instance.name",
            "${service.name}.${net.hostname:${HOSTNAME:localhost}}.${http.port:8080}".into(),
        ),
        // Logging
        (
            "log.file",
            "${keel.log.directory}/${keel.instance.name}.log".into(),
        ),
        ("http.access_log.enabled", true.into()),
        ("http.access_log.directory", "${keel.log.directory}".into()),
        ("http.access_log.prefix", "${keel.instance.name}.access".into()),
        // Operational endpoints
        ("endpoints.info.sensitive", false.into()),
        ("endpoints.health.sensitive", false.into()),
        ("auth.user.name", DEFAULT_USER.into()),
        // Service registry
        ("registry.instance.hostname", "${net.hostname}".into()),
        ("registry.instance.ip_address", "${net.hostname}".into()),
        (
            "registry.instance.status_url_path",
            "${management.base_path}/info".into(),
        ),
        (
            "registry.instance.health_url_path",
            "${management.base_path}/health".into(),
        ),
        // Serialization
        ("serialization.enums_as_strings", true.into()),
        ("serialization.dates_as_timestamps", false.into()),
        // Encoding
        ("storage.script_encoding", "UTF-8".into()),
    ]
}

/// Defaults applied only in the development environment.
pub(crate) fn development_layer() -> PropertyLayer {
    vec![
        (
            "registry.instance.heartbeat_interval_seconds",
            DEV_HEARTBEAT_INTERVAL_SECS.into(),
        ),
        ("auth.user.password", DEFAULT_DEV_PASSWORD.into()),
        ("sql.console.enabled", true.into()),
        ("sql.show_statements", true.into()),
        ("trace.sample_rate", "1.0".into()),
        ("keel.log.directory", DEV_LOG_DIRECTORY.into()),
    ]
}

/// Defaults applied in every environment except development.
pub(crate) fn standard_layer() -> PropertyLayer {
    vec![
        ("auth.user.password", PASSWORD_MUST_OVERRIDE.into()),
        ("keel.log.directory", RUNTIME_LOG_DIRECTORY.into()),
    ]
}
