//! Registration of composed defaults onto a configuration builder.
//!
//! Responsibilities:
//! - Seed a `config::ConfigBuilder` with every composed entry at default
//!   (lowest) priority.
//!
//! Does NOT handle:
//! - Choosing or ordering the higher-priority sources (files, environment,
//!   overrides); the caller owns the builder.
//! - Placeholder interpolation: templated text is registered verbatim.
//!
//! Invariants:
//! - `set_default` is the lowest-priority slot in the `config` crate: any
//!   file, environment, or override source shadows these entries.

use config::ConfigBuilder;
use config::builder::BuilderState;
use thiserror::Error;

use crate::composer::ResolvedDefaults;

/// Errors that can occur while registering defaults on a builder.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The `config` crate rejected a key as a path expression.
    #[error("failed to register default property `{key}`")]
    InvalidKey {
        key: String,
        #[source]
        source: config::ConfigError,
    },
}

impl ResolvedDefaults {
    /// Register every composed entry on `builder` at default priority.
    ///
    /// Returns the builder so the caller can stack higher-priority sources
    /// on top of the seeded defaults.
    pub fn register<St>(
        &self,
        mut builder: ConfigBuilder<St>,
    ) -> Result<ConfigBuilder<St>, RegisterError>
    where
        St: BuilderState,
    {
        for (key, value) in self.iter() {
            builder = builder
                .set_default(key, value.clone())
                .map_err(|source| RegisterError::InvalidKey {
                    key: key.to_string(),
                    source,
                })?;
        }
        Ok(builder)
    }
}
