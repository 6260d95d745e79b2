use crate::cipher::CipherAlgorithm;
use crate::cipher::alphabet::map_letter;
use crate::config::ALPHABET_LEN;
use crate::error::Result;

/// Single-integer shift cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caesar {
    shift: i64,
}

impl Caesar {
    /// Every integer is a usable key; it is reduced modulo 26.
    pub fn new(key: i64) -> Self {
        Self { shift: key.rem_euclid(ALPHABET_LEN) }
    }

    #[inline]
    pub fn shift(&self) -> i64 {
        self.shift
    }

    fn shift_letters(message: &str, shift: i64) -> String {
        message.chars().map(|c| map_letter(c, |x| x + shift)).collect()
    }
}

impl CipherAlgorithm for Caesar {
    fn encrypt(&self, message: &str) -> Result<String> {
        Ok(Self::shift_letters(message, self.shift))
    }

    fn decrypt(&self, message: &str) -> Result<String> {
        Ok(Self::shift_letters(message, -self.shift))
    }
}
