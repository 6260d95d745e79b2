//! Global Configuration Constants
//!
//! Fixed parameters shared by every cipher in the suite: the working
//! alphabets, block geometry and the filler letter used for padding.
//! Everything here is immutable process-wide data.

/// Application name used in banners and command-line help.
pub const APP_NAME: &str = "Classica";

// === Alphabet ===

/// Size of the full Latin alphabet used by Caesar, Affine, Vigenere and Hill.
///
/// All letter arithmetic in the suite is performed modulo this value.
pub const ALPHABET_LEN: i64 = 26;

// === Playfair ===

/// Side length of the Playfair keysquare.
pub const GRID_SIZE: usize = 5;

/// Letter dropped from the Playfair working alphabet.
///
/// It is merged into [`PLAYFAIR_SUBSTITUTE`] in both keywords and messages,
/// so `j` and `i` decrypt to the same letter.
pub const PLAYFAIR_MERGED: char = 'j';

/// Letter that stands in for [`PLAYFAIR_MERGED`].
pub const PLAYFAIR_SUBSTITUTE: char = 'i';

/// The 25-letter Playfair working alphabet (no `j`).
pub const PLAYFAIR_ALPHABET: &str = "abcdefghiklmnopqrstuvwxyz";

// === Block ciphers ===

/// Letter appended to complete a short final block on encryption.
///
/// Used by both Playfair (digraphs) and Hill (n-blocks). Decryption never
/// strips it: the ciphertext carries no length information.
pub const FILLER: char = 'x';

/// Dimension of the Hill key matrix accepted by the registry.
pub const HILL_ORDER: usize = 3;
