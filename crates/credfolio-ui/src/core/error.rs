//! Error types for values crossing the string boundary into the UI core.

use thiserror::Error;

/// A raw value fell outside one of the closed UI enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownValue {
    /// Enumeration the value was parsed as (e.g. `strength level`).
    pub kind: &'static str,
    /// Raw input that failed to match.
    pub value: String,
}

impl UnknownValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UnknownValue;

    #[test]
    fn display_names_kind_and_value() {
        let err = UnknownValue::new("strength level", "excellent");
        assert_eq!(err.to_string(), "unknown strength level 'excellent'");
    }
}
