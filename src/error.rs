//! Error type for field configuration.

use thiserror::Error;

/// Errors raised by layout computation.
///
/// There is exactly one failure mode: a configuration that can never be laid
/// out. Everything else (out-of-range reduction scale, over-long text) is
/// clamped or truncated instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// `code_length` must be at least one segment.
    #[error("code length must be greater than zero (got {code_length})")]
    InvalidConfiguration { code_length: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = FieldError::InvalidConfiguration { code_length: 0 };
        assert_eq!(err.to_string(), "code length must be greater than zero (got 0)");
    }
}
