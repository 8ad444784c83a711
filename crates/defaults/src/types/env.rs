//! Environment classification.
//!
//! Responsibilities:
//! - Define `EnvClass`, the single environment class a service runs in.
//!
//! Does NOT handle:
//! - Deriving the class from profile tags (see the `classifier` module).
//!
//! Invariants:
//! - At most one class holds per startup; `Unset` means no environment tag
//!   was supplied and is treated as non-development everywhere downstream.

use serde::{Deserialize, Serialize};

/// Environment class derived from the active profile tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvClass {
    /// Local development: consoles, verbose logging, known credentials.
    Development,
    /// Any tag starting with `test` (`test`, `testCi`, `test1`, ...).
    Test,
    /// Production.
    Production,
    /// No environment tag was supplied.
    #[default]
    Unset,
}

impl EnvClass {
    /// Whether the development layer applies. Everything that is not
    /// explicitly `Development`, including `Unset`, is non-development.
    pub fn is_development(self) -> bool {
        matches!(self, EnvClass::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_development_is_development() {
        assert!(EnvClass::Development.is_development());
        assert!(!EnvClass::Test.is_development());
        assert!(!EnvClass::Production.is_development());
        assert!(!EnvClass::Unset.is_development());
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(EnvClass::default(), EnvClass::Unset);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EnvClass::Production).unwrap(),
            "\"production\""
        );
    }
}
