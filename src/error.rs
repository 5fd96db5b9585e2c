// src/error.rs
use std::fmt;

/// Error types for the mc-engine library
#[derive(Debug, Clone, PartialEq)]
pub enum McError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration (path counts and other integer settings)
    InvalidConfiguration { field: String, reason: String },
}

impl fmt::Display for McError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            McError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            McError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for McError {}

/// Result type alias for mc-engine operations
pub type McResult<T> = Result<T, McError>;

/// Validation utilities
pub mod validation {
    use super::{McError, McResult};

    /// Upper bound enforced by the opt-in request and config checks
    pub const MAX_PATHS: usize = 1_000_000_000;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> McResult<()> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> McResult<()> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> McResult<()> {
        if !value.is_finite() {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Convert a caller-supplied signed path count into a usable one.
    ///
    /// Zero is accepted (it prices to zero); negative counts are a domain error.
    /// No upper bound is applied here.
    pub fn validate_path_count(paths: i64) -> McResult<usize> {
        if paths < 0 {
            return Err(McError::InvalidConfiguration {
                field: "path_count".to_string(),
                reason: format!("must be non-negative, got {}", paths),
            });
        }
        let paths = usize::try_from(paths).map_err(|_| McError::InvalidConfiguration {
            field: "path_count".to_string(),
            reason: format!("{} does not fit in usize on this platform", paths),
        })?;
        Ok(paths)
    }

    /// Validate that a path count stays within [`MAX_PATHS`]
    pub fn validate_max_paths(field: &str, paths: usize) -> McResult<()> {
        if paths > MAX_PATHS {
            Err(McError::InvalidConfiguration {
                field: field.to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("spot", 100.0).is_ok());
        assert!(validate_positive("spot", 0.0).is_err());
        assert!(validate_positive("spot", -0.1).is_err());
        assert!(validate_positive("spot", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("volatility", 0.0).is_ok());
        assert!(validate_non_negative("volatility", 0.2).is_ok());
        assert!(validate_non_negative("volatility", -1e-12).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("rate", -0.01).is_ok());
        assert!(validate_finite("rate", f64::NAN).is_err());
        assert!(validate_finite("rate", f64::INFINITY).is_err());
        assert!(validate_finite("rate", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_path_count() {
        assert_eq!(validate_path_count(0), Ok(0));
        assert_eq!(validate_path_count(1_000), Ok(1_000));

        match validate_path_count(-5) {
            Err(McError::InvalidConfiguration { field, reason }) => {
                assert_eq!(field, "path_count");
                assert!(reason.contains("-5"));
            }
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }

    }

    #[test]
    fn test_path_count_has_no_upper_bound() {
        assert_eq!(validate_path_count(1_000_000_001), Ok(1_000_000_001));
        assert_eq!(
            validate_path_count(MAX_PATHS as i64 + 1),
            Ok(MAX_PATHS + 1)
        );
    }

    #[test]
    fn test_validate_max_paths_names_field() {
        assert!(validate_max_paths("path_count", MAX_PATHS).is_ok());

        match validate_max_paths("path_count", MAX_PATHS + 1) {
            Err(McError::InvalidConfiguration { field, .. }) => assert_eq!(field, "path_count"),
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let error = McError::InvalidParameters {
            parameter: "strike".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("strike"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }
}
