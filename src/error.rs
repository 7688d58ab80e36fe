//! Configuration errors
//!
//! These are raised while a [`RuleTable`](crate::RuleTable) is being set up
//! (rule declarations parsed, parameters checked). Evaluating a rule never
//! returns an error; a subject either passes or fails.

use thiserror::Error;

/// Why a range parameter such as `"1-300"` could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// No parameter text at all.
    #[error("range parameter is empty")]
    Empty,

    /// The text did not split into exactly two `-`-separated tokens.
    #[error("range parameter must be `<min>-<max>`, found {tokens} token(s)")]
    Separator {
        /// Number of tokens found.
        tokens: usize,
    },

    /// One end is not a non-negative base-10 integer.
    #[error("`{token}` is not a non-negative integer")]
    NotANumber {
        /// The offending token.
        token: String,
    },

    /// `min` is larger than `max`.
    #[error("range minimum {min} is greater than maximum {max}")]
    Inverted {
        /// Parsed minimum.
        min: usize,
        /// Parsed maximum.
        max: usize,
    },
}

/// A rule declaration that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The rule name is not one of the known rules.
    #[error("unknown rule `{name}`")]
    UnknownRule {
        /// The name as written.
        name: String,
    },

    /// The parameter of a length-bounded rule is malformed (strict mode only).
    #[error("invalid parameter `{param}` for rule `{rule}`: {source}")]
    InvalidParam {
        /// Canonical rule name.
        rule: &'static str,
        /// The parameter as written.
        param: String,
        /// What was wrong with it.
        #[source]
        source: ParamError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_error_messages() {
        assert_eq!(ParamError::Empty.to_string(), "range parameter is empty");
        assert_eq!(
            ParamError::Inverted { min: 9, max: 3 }.to_string(),
            "range minimum 9 is greater than maximum 3"
        );
    }

    #[test]
    fn test_invalid_param_keeps_source() {
        use std::error::Error as _;

        let err = ConfigError::InvalidParam {
            rule: "password",
            param: "15-8".to_string(),
            source: ParamError::Inverted { min: 15, max: 8 },
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter `15-8` for rule `password`: range minimum 15 is greater than maximum 8"
        );
        assert!(err.source().is_some());
    }
}
