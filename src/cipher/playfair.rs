//! Playfair digraph cipher.
//!
//! Works in three phases: keysquare construction, message normalization and
//! pairwise substitution. The keysquare is derived from the keyword on every
//! call and never mutated afterwards.
//!
//! Encryption output is upper-case and decryption output lower-case.
//! Doubled letters inside a digraph are not split; such a pair always falls
//! under the same-row rule and still decrypts correctly.

use std::fmt;

use tap::TapFallible;
use tracing::debug;

use crate::cipher::CipherAlgorithm;
use crate::cipher::alphabet::index_of;
use crate::config::{FILLER, GRID_SIZE, PLAYFAIR_ALPHABET, PLAYFAIR_MERGED, PLAYFAIR_SUBSTITUTE};
use crate::error::{CipherError, Result};
use crate::types::ProcessorMode;

/// Grid coordinates as `(row, column)`.
type Position = (usize, usize);

/// Lower-cases, drops non-letters and folds the merged letter.
fn normalize(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(char::is_ascii_alphabetic).map(|c| match c.to_ascii_lowercase() {
        PLAYFAIR_MERGED => PLAYFAIR_SUBSTITUTE,
        c => c,
    })
}

/// The 5×5 letter grid derived from a keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keysquare {
    grid: [[char; GRID_SIZE]; GRID_SIZE],
    positions: [Option<Position>; 26],
}

impl Keysquare {
    /// Keyword letters first (deduplicated, first occurrence wins), then the
    /// rest of the working alphabet in natural order.
    pub fn new(keyword: &str) -> Self {
        let mut order: Vec<char> = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        for c in normalize(keyword).chain(PLAYFAIR_ALPHABET.chars()) {
            if !order.contains(&c) {
                order.push(c);
            }
        }

        let mut grid = [[' '; GRID_SIZE]; GRID_SIZE];
        let mut positions = [None; 26];
        for (i, &c) in order.iter().enumerate() {
            let (row, col) = (i / GRID_SIZE, i % GRID_SIZE);
            grid[row][col] = c;
            if let Some(slot) = index_of(c).and_then(|idx| usize::try_from(idx).ok()) {
                positions[slot] = Some((row, col));
            }
        }

        Self { grid, positions }
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.grid
    }

    /// Finds the `(row, column)` of `letter`.
    ///
    /// # Errors
    ///
    /// [`CipherError::KeyNotFound`] if the letter is outside the working alphabet.
    pub fn locate(&self, letter: char) -> Result<Position> {
        index_of(letter)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|slot| self.positions[slot])
            .ok_or(CipherError::KeyNotFound(letter))
    }

    #[inline]
    fn at(&self, (row, col): Position) -> char {
        self.grid[row][col]
    }

    /// Substitutes one digraph.
    ///
    /// Rules, in order of precedence: same row shifts along the row, same
    /// column shifts along the column, otherwise the letters swap columns.
    /// The rectangle rule is its own inverse, so it ignores `mode`.
    pub fn substitute(&self, first: char, second: char, mode: ProcessorMode) -> Result<(char, char)> {
        let (r1, c1) = self.locate(first)?;
        let (r2, c2) = self.locate(second)?;
        let step = match mode {
            ProcessorMode::Encrypt => 1,
            ProcessorMode::Decrypt => GRID_SIZE - 1,
        };

        let (p1, p2) = if r1 == r2 {
            ((r1, (c1 + step) % GRID_SIZE), (r2, (c2 + step) % GRID_SIZE))
        } else if c1 == c2 {
            (((r1 + step) % GRID_SIZE, c1), ((r2 + step) % GRID_SIZE, c2))
        } else {
            ((r1, c2), (r2, c1))
        };

        Ok((self.at(p1), self.at(p2)))
    }
}

impl fmt::Display for Keysquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            f.write_str(&line.join(" "))?;
        }
        Ok(())
    }
}

/// Playfair cipher keyed by a case-insensitive keyword.
///
/// An empty keyword is valid and yields the natural-order grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playfair {
    keyword: String,
}

impl Playfair {
    pub fn new(keyword: &str) -> Self {
        Self { keyword: normalize(keyword).collect() }
    }

    /// Builds a fresh keysquare for one operation.
    pub fn keysquare(&self) -> Keysquare {
        Keysquare::new(&self.keyword)
    }

    fn process(&self, letters: &[char], mode: ProcessorMode) -> Result<String> {
        let square = self.keysquare();
        let mut output = String::with_capacity(letters.len());

        for pair in letters.chunks_exact(2) {
            let (a, b) = square.substitute(pair[0], pair[1], mode)?;
            output.push(a);
            output.push(b);
        }

        Ok(match mode {
            ProcessorMode::Encrypt => output.to_ascii_uppercase(),
            ProcessorMode::Decrypt => output,
        })
    }
}

impl CipherAlgorithm for Playfair {
    fn encrypt(&self, message: &str) -> Result<String> {
        let mut letters: Vec<char> = normalize(message).collect();
        if letters.len() % 2 == 1 {
            letters.push(FILLER);
        }
        self.process(&letters, ProcessorMode::Encrypt).tap_ok(|out| debug!(digraphs = out.len() / 2, "playfair encrypted"))
    }

    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] when the normalized ciphertext has an
    /// odd number of letters; decryption never pads.
    fn decrypt(&self, message: &str) -> Result<String> {
        let letters: Vec<char> = normalize(message).collect();
        if letters.len() % 2 == 1 {
            return Err(CipherError::MalformedInput(format!("playfair ciphertext must have an even number of letters, got {}", letters.len())));
        }
        self.process(&letters, ProcessorMode::Decrypt).tap_ok(|out| debug!(digraphs = out.len() / 2, "playfair decrypted"))
    }
}
