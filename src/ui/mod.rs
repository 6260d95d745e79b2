//! User interface components for terminal interaction.
//!
//! # Modules
//!
//! - [`display`]: Banner, result and error messages, registry table
//! - [`prompt`]: Cipher menu, mode selection and validated parameter prompts

pub mod display;
pub mod prompt;

pub use display::{clear_screen, print_banner, show_error, show_goodbye, show_keysquare, show_registry, show_result, show_selected};
