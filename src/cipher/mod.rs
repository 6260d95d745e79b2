//! # Classical Cipher Module
//!
//! This module provides the cipher transforms of the suite and the single
//! dispatch point that routes an operation to the selected cipher.
//!
//! ## Architecture
//!
//! - **Support Layer**: letter/index mapping and modular arithmetic
//!   ([`alphabet`]), square matrices over Z/26 ([`matrix`])
//! - **Implementation Layer**: one type per cipher, validated at construction
//! - **Abstraction Layer**: the [`CipherAlgorithm`] trait and the closed
//!   [`Cipher`] enumeration over all configured ciphers
//!
//! ## Key Concepts
//!
//! - **Construction-time validation**: every key that reaches `encrypt` or
//!   `decrypt` has already passed its mathematical preconditions
//! - **Statelessness**: operations take `&self` and derive any working state
//!   (keysquare, vectors) per call, so cipher values are `Send + Sync`
//! - **All-or-nothing output**: an operation returns the full result or an error

use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::info;

use crate::error::Result;
use crate::types::ProcessorMode;

pub mod alphabet;
pub mod matrix;

mod affine;
mod caesar;
mod hill;
mod playfair;
mod vigenere;

pub use affine::Affine;
pub use caesar::Caesar;
pub use hill::Hill;
pub use matrix::KeyMatrix;
pub use playfair::{Keysquare, Playfair};
pub use vigenere::Vigenere;

/// # Cipher Algorithm Trait
///
/// Uniform encrypt/decrypt contract shared by every cipher in the suite.
pub trait CipherAlgorithm {
    /// Encrypts `message`.
    ///
    /// # Errors
    ///
    /// Only block ciphers can fail here, and only on internal invariant
    /// violations; key problems are rejected at construction.
    fn encrypt(&self, message: &str) -> Result<String>;

    /// Decrypts `message`.
    ///
    /// # Errors
    ///
    /// Block ciphers reject ciphertext whose letter count does not fill
    /// whole blocks.
    fn decrypt(&self, message: &str) -> Result<String>;

    /// Runs the operation selected by `mode`.
    ///
    /// # Errors
    ///
    /// As [`CipherAlgorithm::encrypt`] or [`CipherAlgorithm::decrypt`].
    fn apply(&self, mode: ProcessorMode, message: &str) -> Result<String> {
        match mode {
            ProcessorMode::Encrypt => self.encrypt(message),
            ProcessorMode::Decrypt => self.decrypt(message),
        }
    }
}

/// Identifier of each cipher in the suite, in menu order.
///
/// Parsing is case-insensitive and accepts `cesar` as an alias of Caesar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum CipherKind {
    #[strum(to_string = "Caesar", serialize = "cesar")]
    Caesar,
    Affine,
    #[strum(to_string = "Vigenere", serialize = "vigenère")]
    Vigenere,
    Playfair,
    Hill,
}

/// A fully validated, ready-to-use cipher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cipher {
    Caesar(Caesar),
    Affine(Affine),
    Vigenere(Vigenere),
    Playfair(Playfair),
    Hill(Hill),
}

impl Cipher {
    pub fn kind(&self) -> CipherKind {
        match self {
            Self::Caesar(_) => CipherKind::Caesar,
            Self::Affine(_) => CipherKind::Affine,
            Self::Vigenere(_) => CipherKind::Vigenere,
            Self::Playfair(_) => CipherKind::Playfair,
            Self::Hill(_) => CipherKind::Hill,
        }
    }

    fn algorithm(&self) -> &dyn CipherAlgorithm {
        match self {
            Self::Caesar(c) => c,
            Self::Affine(c) => c,
            Self::Vigenere(c) => c,
            Self::Playfair(c) => c,
            Self::Hill(c) => c,
        }
    }
}

impl CipherAlgorithm for Cipher {
    fn encrypt(&self, message: &str) -> Result<String> {
        info!(cipher = %self.kind(), chars = message.chars().count(), "encrypting");
        self.algorithm().encrypt(message)
    }

    fn decrypt(&self, message: &str) -> Result<String> {
        info!(cipher = %self.kind(), chars = message.chars().count(), "decrypting");
        self.algorithm().decrypt(message)
    }
}

impl From<Caesar> for Cipher {
    fn from(c: Caesar) -> Self {
        Self::Caesar(c)
    }
}

impl From<Affine> for Cipher {
    fn from(c: Affine) -> Self {
        Self::Affine(c)
    }
}

impl From<Vigenere> for Cipher {
    fn from(c: Vigenere) -> Self {
        Self::Vigenere(c)
    }
}

impl From<Playfair> for Cipher {
    fn from(c: Playfair) -> Self {
        Self::Playfair(c)
    }
}

impl From<Hill> for Cipher {
    fn from(c: Hill) -> Self {
        Self::Hill(c)
    }
}
