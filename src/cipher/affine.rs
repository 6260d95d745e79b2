use tracing::debug;

use crate::cipher::CipherAlgorithm;
use crate::cipher::alphabet::{map_letter, mod_inverse};
use crate::config::ALPHABET_LEN;
use crate::error::{CipherError, Result};

/// Linear cipher `E(x) = a·x + b (mod 26)`.
///
/// The multiplier inverse is resolved once at construction, so a key that
/// cannot be decrypted is rejected before any character is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine {
    a: i64,
    b: i64,
    a_inv: i64,
}

impl Affine {
    /// Builds the cipher from multiplier `a` (`key1`) and offset `b` (`key2`).
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKey`] when `gcd(a, 26) != 1`.
    pub fn new(a: i64, b: i64) -> Result<Self> {
        let a_inv = mod_inverse(a, ALPHABET_LEN).ok_or_else(|| CipherError::InvalidKey(format!("multiplier {a} is not coprime to {ALPHABET_LEN}")))?;
        let (a, b) = (a.rem_euclid(ALPHABET_LEN), b.rem_euclid(ALPHABET_LEN));
        debug!("affine key accepted");
        Ok(Self { a, b, a_inv })
    }

    #[inline]
    pub fn multiplier_inverse(&self) -> i64 {
        self.a_inv
    }
}

impl CipherAlgorithm for Affine {
    fn encrypt(&self, message: &str) -> Result<String> {
        Ok(message.chars().map(|c| map_letter(c, |x| self.a * x + self.b)).collect())
    }

    fn decrypt(&self, message: &str) -> Result<String> {
        Ok(message.chars().map(|c| map_letter(c, |y| self.a_inv * (y - self.b))).collect())
    }
}
