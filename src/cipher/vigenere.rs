use tracing::debug;

use crate::cipher::CipherAlgorithm;
use crate::cipher::alphabet::{index_of, map_letter};
use crate::error::{CipherError, Result};

/// Repeating-keyword additive cipher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vec<i64>,
}

impl Vigenere {
    /// Builds the cipher from the alphabetic characters of `keyword`.
    /// Other characters in the keyword are ignored.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKey`] when `keyword` contains no letters.
    pub fn new(keyword: &str) -> Result<Self> {
        let shifts: Vec<i64> = keyword.chars().filter_map(index_of).collect();
        if shifts.is_empty() {
            return Err(CipherError::InvalidKey("keyword must contain at least one letter".into()));
        }
        debug!(period = shifts.len(), "vigenere key accepted");
        Ok(Self { shifts })
    }

    /// Only letters advance the keyword cursor.
    fn shift_letters(&self, message: &str, sign: i64) -> String {
        let mut cursor = self.shifts.iter().cycle();
        message
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    let k = cursor.next().copied().unwrap_or_default();
                    map_letter(c, |x| x + sign * k)
                } else {
                    c
                }
            })
            .collect()
    }
}

impl CipherAlgorithm for Vigenere {
    fn encrypt(&self, message: &str) -> Result<String> {
        Ok(self.shift_letters(message, 1))
    }

    fn decrypt(&self, message: &str) -> Result<String> {
        Ok(self.shift_letters(message, -1))
    }
}
