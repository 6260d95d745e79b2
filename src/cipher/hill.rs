//! Hill block cipher.
//!
//! Each block of `n` letters is treated as a column vector and multiplied by
//! the key matrix modulo 26. The inverse matrix is derived when the key is
//! built, which also validates that the key can decrypt at all.
//!
//! Padding added to complete the final block on encryption is kept by
//! decryption: the ciphertext carries no length information, so a message of
//! `len % n != 0` letters decrypts to the padded form.

use tracing::debug;

use crate::cipher::CipherAlgorithm;
use crate::cipher::alphabet::{index_of, letter_at, normalize};
use crate::cipher::matrix::KeyMatrix;
use crate::config::FILLER;
use crate::error::{CipherError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hill {
    key: KeyMatrix,
    inverse: KeyMatrix,
}

impl Hill {
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] for a matrix of order zero,
    /// [`CipherError::InvalidKey`] when the determinant of `key` is not
    /// invertible modulo 26.
    pub fn new(key: KeyMatrix) -> Result<Self> {
        if key.order() == 0 {
            return Err(CipherError::MalformedInput("key matrix has no rows".into()));
        }
        let inverse = key.inverse()?;
        debug!(order = key.order(), "hill key accepted");
        Ok(Self { key, inverse })
    }

    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] for a non-square matrix, otherwise as [`Hill::new`].
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        Self::new(KeyMatrix::from_rows(rows)?)
    }

    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    pub fn inverse(&self) -> &KeyMatrix {
        &self.inverse
    }

    fn transform(matrix: &KeyMatrix, indices: &[i64], uppercase: bool) -> String {
        indices.chunks_exact(matrix.order()).flat_map(|block| matrix.mul_vector(block)).map(|v| letter_at(v, uppercase)).collect()
    }

    fn indices(message: &str) -> Vec<i64> {
        normalize(message).chars().filter_map(index_of).collect()
    }
}

impl CipherAlgorithm for Hill {
    fn encrypt(&self, message: &str) -> Result<String> {
        let mut indices = Self::indices(message);
        let n = self.key.order();
        let filler = index_of(FILLER).unwrap_or_default();
        while indices.len() % n != 0 {
            indices.push(filler);
        }
        let output = Self::transform(&self.key, &indices, true);
        debug!(blocks = output.len() / n, "hill encrypted");
        Ok(output)
    }

    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] when the letter count is not a multiple
    /// of the block size.
    fn decrypt(&self, message: &str) -> Result<String> {
        let indices = Self::indices(message);
        let n = self.key.order();
        if indices.len() % n != 0 {
            return Err(CipherError::MalformedInput(format!("hill ciphertext length {} is not a multiple of {n}", indices.len())));
        }
        let output = Self::transform(&self.inverse, &indices, false);
        debug!(blocks = output.len() / n, "hill decrypted");
        Ok(output)
    }
}
