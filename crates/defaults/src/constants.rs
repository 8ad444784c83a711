//! Centralized constants for the keel workspace.
//!
//! This module contains the literal values shared by the layer tables,
//! the classifier, and their tests, to avoid magic string duplication.

// =============================================================================
// Profile Tags
// =============================================================================

/// Tag selecting the development environment class.
pub const TAG_DEVELOPMENT: &str = "development";

/// Tag selecting the production environment class.
pub const TAG_PRODUCTION: &str = "production";

/// Prefix selecting the test environment class (`test`, `testCi`, `test1`, ...).
pub const TAG_TEST_PREFIX: &str = "test";

/// Tag enabling service registration and discovery.
pub const TAG_DISCOVERY: &str = "discovery";

/// Tag enabling centralized remote configuration.
pub const TAG_CONFIG: &str = "config";

/// Tag enabling both discovery and remote configuration.
pub const TAG_CLOUD: &str = "cloud";

// =============================================================================
// Credential Defaults
// =============================================================================

/// Default operator account name, emitted in every environment.
pub const DEFAULT_USER: &str = "admin";

/// Default operator password, emitted only in the development environment.
pub const DEFAULT_DEV_PASSWORD: &str = "admin";

/// Password sentinel emitted outside development. Never a working
/// credential: a higher-priority source must shadow it.
pub const PASSWORD_MUST_OVERRIDE: &str = "Change_Me_Or_Override_Outside_Dev";

// =============================================================================
// Path & Interval Defaults
// =============================================================================

/// Base path under which operational endpoints (info, health) are served.
pub const MANAGEMENT_BASE_PATH: &str = "/admin";

/// Registry heartbeat interval used in development, in seconds.
pub const DEV_HEARTBEAT_INTERVAL_SECS: i64 = 5;

/// Log directory template in development: under the build output path, so
/// a clean build also removes stale logs.
pub const DEV_LOG_DIRECTORY: &str = "${working.dir}/target";

/// Log directory template outside development.
pub const RUNTIME_LOG_DIRECTORY: &str = "${working.dir}/logs";
