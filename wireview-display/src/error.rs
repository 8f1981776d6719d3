//! Error types for display component construction

use thiserror::Error;

/// Result type for display component construction.
pub type Result<T> = std::result::Result<T, DisplayError>;

/// Structural validation errors raised while building display components.
///
/// Every variant is fatal to the construction attempt that raised it; no
/// partially built component is returned. A lookup naming an attribute the
/// data model does not declare is not one of these; it passes through with
/// its title unset.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// A lookup referenced an attribute with an empty name.
    #[error("display lookup field name cannot be empty")]
    EmptyFieldName,

    /// Table width percentage outside the closed interval [0, 100].
    #[error("table width percent must be between 0 and 100, got {value}")]
    TableWidthOutOfRange { value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DisplayError::EmptyFieldName;
        assert_eq!(err.to_string(), "display lookup field name cannot be empty");
    }

    #[test]
    fn test_width_error_carries_value() {
        let err = DisplayError::TableWidthOutOfRange { value: 101 };
        assert!(err.to_string().contains("101"));
        assert!(err.to_string().contains("between 0 and 100"));
    }
}
