//! Classica - classical ciphers behind one encrypt/decrypt contract.
//!
//! Implements five historical ciphers:
//! - Caesar shift
//! - Affine `a·x + b (mod 26)`
//! - Vigenere repeating-keyword shift
//! - Playfair 5×5 keysquare digraph substitution
//! - Hill n×n matrix multiplication over Z/26
//!
//! None of them is secure; they exist for teaching and puzzles.
//!
//! # Examples
//!
//! ```
//! use classica::registry::{self, Params};
//! use classica::types::{ParamValue, ProcessorMode};
//!
//! let entry = registry::lookup("vigenere").unwrap();
//! let params = Params::new().with("key", ParamValue::Text("key".into()));
//! let ciphertext = entry.run(ProcessorMode::Encrypt, "hello", &params).unwrap();
//! assert_eq!(ciphertext, "rijvs");
//! ```
//!
//! Ciphers can also be built directly, with keys validated up front:
//!
//! ```
//! use classica::cipher::{CipherAlgorithm, Hill};
//!
//! let hill = Hill::from_rows(&[vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]).unwrap();
//! assert_eq!(hill.encrypt("act").unwrap(), "POH");
//! assert!(Hill::from_rows(&[vec![0; 3], vec![0; 3], vec![0; 3]]).is_err());
//! ```

pub mod cipher;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use cipher::{Cipher, CipherAlgorithm, CipherKind};
pub use error::{CipherError, Result};
