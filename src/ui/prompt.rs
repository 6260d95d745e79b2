//! Interactive prompts for the menu mode.
//!
//! Provides the numbered cipher menu, mode selection, the message prompt and
//! one validated prompt per declared cipher parameter, using inquire.

use std::fmt;

use anyhow::{Result, anyhow};
use classica::registry::{self, Entry, ParamSpec};
use classica::types::{ParamKind, ParamValue, ProcessorMode};
use inquire::ui::RenderConfig;
use inquire::validator::Validation;
use inquire::{CustomUserError, Select, Text};

/// One line of the cipher menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Cipher(Entry),
    Quit,
}

/// Menu line with its 1-based position, as shown to the user.
struct MenuItem {
    number: usize,
    choice: MenuChoice,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.choice {
            MenuChoice::Cipher(entry) => write!(f, "{}. {}", self.number, entry.name()),
            MenuChoice::Quit => write!(f, "{}. Quit", self.number),
        }
    }
}

/// Every cipher in registry order, followed by Quit.
fn menu_items() -> Vec<MenuItem> {
    registry::entries().map(MenuChoice::Cipher).chain(std::iter::once(MenuChoice::Quit)).enumerate().map(|(i, choice)| MenuItem { number: i + 1, choice }).collect()
}

/// Hint shown under a parameter prompt.
fn help_for(spec: &ParamSpec) -> &'static str {
    match spec.kind {
        ParamKind::Integer => "a whole number, e.g. 3 or -7",
        ParamKind::Text => "letters; case is ignored",
        ParamKind::Matrix => "3x3 integers, rows separated by ';' (e.g. 6 24 1; 13 16 10; 20 17 15)",
    }
}

/// Interactive prompt handler for the menu mode.
pub struct Prompt {
    render_config: RenderConfig<'static>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt {
    pub fn new() -> Self {
        Self { render_config: RenderConfig::default_colored() }
    }

    /// Shows the numbered cipher menu with a final Quit entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be displayed or is cancelled.
    pub fn select_cipher(&self) -> Result<MenuChoice> {
        Select::new("Select a cipher", menu_items())
            .with_render_config(self.render_config)
            .with_page_size(8)
            .prompt()
            .map(|item| item.choice)
            .map_err(|e| anyhow!("cipher selection failed: {e}"))
    }

    /// Prompts user to select encryption or decryption.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be displayed or is cancelled.
    pub fn select_processing_mode(&self) -> Result<ProcessorMode> {
        Select::new("Select operation", ProcessorMode::ALL.to_vec())
            .with_render_config(self.render_config)
            .prompt()
            .map_err(|e| anyhow!("mode selection failed: {e}"))
    }

    /// Prompts for the message. Empty input is allowed and yields empty output.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails.
    pub fn prompt_message(&self) -> Result<String> {
        Text::new("Enter the message:").with_render_config(self.render_config).prompt().map_err(|e| anyhow!("message input failed: {e}"))
    }

    /// Prompts for one parameter, re-asking until the input coerces to the
    /// declared kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails.
    pub fn prompt_param(&self, spec: &ParamSpec) -> Result<ParamValue> {
        let validator_spec = *spec;
        let label = format!("Enter {} ({}):", spec.name, spec.kind);

        let raw = Text::new(&label)
            .with_render_config(self.render_config)
            .with_help_message(help_for(spec))
            .with_validator(move |input: &str| -> std::result::Result<Validation, CustomUserError> {
                Ok(match validator_spec.coerce(input) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt()
            .map_err(|e| anyhow!("input for {} failed: {e}", spec.name))?;

        Ok(spec.coerce(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_ciphers_then_quit() {
        let labels: Vec<String> = menu_items().iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["1. Caesar", "2. Affine", "3. Vigenere", "4. Playfair", "5. Hill", "6. Quit"]);
    }

    #[test]
    fn test_menu_choices() {
        let items = menu_items();
        assert!(matches!(items[0].choice, MenuChoice::Cipher(entry) if entry.name() == "Caesar"));
        assert_eq!(items.last().map(|i| i.choice), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_default_prompt_uses_colored_render_config() {
        let prompt = Prompt::default();
        assert_eq!(format!("{:?}", prompt.render_config), format!("{:?}", RenderConfig::default_colored()));
    }

    #[test]
    fn test_help_mentions_matrix_format() {
        let spec = registry::lookup("hill").unwrap().params[0];
        assert!(help_for(&spec).contains(';'));
    }
}
