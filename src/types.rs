//! Common type definitions for the cipher suite.
//!
//! # Overview
//!
//! - [`ProcessorMode`]: Distinguishes between encryption and decryption
//! - [`ParamKind`]: Semantic type of a declared cipher parameter
//! - [`ParamValue`]: A parameter value after coercion to its declared kind

use std::fmt::{Display, Formatter, Result};

use strum::{Display as StrumDisplay, IntoStaticStr};

/// Direction of a cipher operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessorMode {
    /// Turn plaintext into ciphertext.
    Encrypt,

    /// Turn ciphertext back into plaintext.
    Decrypt,
}

impl ProcessorMode {
    /// Array containing all processor modes for iteration.
    pub const ALL: &'static [Self] = &[Self::Encrypt, Self::Decrypt];

    /// Returns a human-readable label for the mode.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
        }
    }

    /// Past-tense form used when reporting a result.
    #[inline]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypted",
            Self::Decrypt => "Decrypted",
        }
    }
}

impl Display for ProcessorMode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// Semantic type of a cipher parameter as declared by the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, StrumDisplay, IntoStaticStr)]
pub enum ParamKind {
    /// A signed integer such as a shift or multiplier.
    #[strum(serialize = "integer")]
    Integer,

    /// Free text such as a keyword. Stored lower-cased.
    #[strum(serialize = "text")]
    Text,

    /// A square integer matrix, written row by row.
    #[strum(serialize = "matrix")]
    Matrix,
}

/// A parameter value coerced to its declared [`ParamKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Integer(i64),
    Text(String),
    Matrix(Vec<Vec<i64>>),
}

impl ParamValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Integer(_) => ParamKind::Integer,
            Self::Text(_) => ParamKind::Text,
            Self::Matrix(_) => ParamKind::Matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(ProcessorMode::Encrypt.to_string(), "Encrypt");
        assert_eq!(ProcessorMode::Decrypt.past_tense(), "Decrypted");
        assert_eq!(ProcessorMode::ALL.len(), 2);
    }

    #[test]
    fn test_param_kind_display() {
        assert_eq!(ParamKind::Integer.to_string(), "integer");
        assert_eq!(ParamKind::Matrix.to_string(), "matrix");
        let name: &'static str = ParamKind::Text.into();
        assert_eq!(name, "text");
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(ParamValue::Integer(3).kind(), ParamKind::Integer);
        assert_eq!(ParamValue::Text("key".into()).kind(), ParamKind::Text);
        assert_eq!(ParamValue::Matrix(vec![vec![1]]).kind(), ParamKind::Matrix);
    }
}
