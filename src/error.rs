//! Error types for CIDR parsing and exclusion.
//!
//! Parsing failures and caller errors are returned as values. A broken
//! bisection invariant is not: it is raised as a panic carrying
//! [`ExclusionError::InternalInvariantViolation`] as its message.

use thiserror::Error;

/// Errors raised while parsing or constructing a CIDR block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid CIDR format: '{0}'")]
    InvalidFormat(String),

    #[error("invalid {family} address: '{value}'")]
    InvalidAddress { family: &'static str, value: String },

    #[error("invalid prefix length: '{0}'")]
    InvalidPrefix(String),

    #[error("prefix length /{prefix} is too long for {family} (max /{max})")]
    PrefixTooLong {
        family: &'static str,
        prefix: u8,
        max: u8,
    },
}

/// Errors raised by relation and exclusion operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExclusionError {
    #[error("argument must be an {expected} network, got {found}")]
    InvalidArgumentType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{other} is not contained in {network}")]
    NotContained { network: String, other: String },

    #[error("error performing exclusion: s1={s1} s2={s2} other={other}")]
    InternalInvariantViolation {
        s1: String,
        s2: String,
        other: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ExclusionError::NotContained {
            network: "10.0.0.0/24".to_string(),
            other: "10.0.1.0/24".to_string(),
        };
        assert_eq!(e.to_string(), "10.0.1.0/24 is not contained in 10.0.0.0/24");

        let e = ParseError::PrefixTooLong {
            family: "IPv4",
            prefix: 33,
            max: 32,
        };
        assert_eq!(
            e.to_string(),
            "prefix length /33 is too long for IPv4 (max /32)"
        );
    }
}
