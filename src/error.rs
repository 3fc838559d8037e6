//! Error handling for the AlgoViz application
//!
//! The only failures the core can produce are input-validation errors;
//! configuration and IO errors can occur while persisting preferences.

use thiserror::Error;

/// Main error type for AlgoViz operations
#[derive(Error, Debug)]
pub enum AlgoVizError {
    /// Invalid user input (non-numeric or out-of-range values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AlgoVizError {
    /// Create an input-validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AlgoVizError::InvalidInput(message.into())
    }
}

/// Result type alias for AlgoViz operations
pub type Result<T> = std::result::Result<T, AlgoVizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlgoVizError::invalid_input("array size must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid input: array size must be at least 1"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = AlgoVizError::Config("could not determine data directory".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }
}
