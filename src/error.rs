//! Error types for the cipher suite.

use thiserror::Error;

/// Errors produced by key construction, parameter validation and the
/// cipher transforms.
///
/// Every error is raised before any output is produced: an operation
/// either returns the whole transformed message or fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A key fails a mathematical precondition.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A parameter or message fails type or shape validation.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A Playfair letter is missing from the keysquare.
    ///
    /// Normalization guarantees every letter is present, so this signals a
    /// bug in the suite rather than bad user input.
    #[error("letter '{0}' not found in keysquare")]
    KeyNotFound(char),
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey("multiplier 13 shares a factor with 26".into());
        assert_eq!(err.to_string(), "invalid key: multiplier 13 shares a factor with 26");
    }

    #[test]
    fn test_display_malformed_input() {
        let err = CipherError::MalformedInput("missing parameter 'key'".into());
        assert_eq!(err.to_string(), "malformed input: missing parameter 'key'");
    }

    #[test]
    fn test_display_key_not_found() {
        assert_eq!(CipherError::KeyNotFound('j').to_string(), "letter 'j' not found in keysquare");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::KeyNotFound('a'), CipherError::KeyNotFound('a'));
        assert_ne!(CipherError::InvalidKey("a".into()), CipherError::MalformedInput("a".into()));
    }
}
