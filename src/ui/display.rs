//! Display utilities for results and the cipher registry.

use std::fmt::Display;

use anyhow::Result;
use classica::cipher::Keysquare;
use classica::registry;
use classica::types::ProcessorMode;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use console::{Term, style};

/// Builds the table of ciphers and their declared parameters.
pub fn registry_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic).set_header(vec!["No", "Cipher", "Parameter", "Type", "Required"]);

    for (i, entry) in registry::entries().enumerate() {
        for (j, spec) in entry.params.iter().enumerate() {
            let (number, name) = if j == 0 { ((i + 1).to_string(), entry.name().to_string()) } else { (String::new(), String::new()) };
            table.add_row(vec![number, name, spec.name.to_string(), spec.kind.to_string(), if spec.required { "yes" } else { "no" }.to_string()]);
        }
    }

    table
}

/// Prints the registry table.
pub fn show_registry() {
    println!("{}", registry_table());
}

/// Displays the result of an operation.
///
/// # Arguments
/// * `mode` - The processing mode
/// * `cipher` - Name of the cipher used
/// * `output` - The transformed message
pub fn show_result(mode: ProcessorMode, cipher: &str, output: &str) {
    println!();
    println!("{} {}", style("✓").green(), style(format!("{} message ({cipher}):", mode.past_tense())).bold());
    println!("  {}", style(output).cyan());
    println!();
}

/// Displays a validation or key error without leaving the menu.
pub fn show_error(error: &dyn Display) {
    println!();
    println!("{} {}", style("✗").red(), style(error.to_string()).red());
    println!();
}

/// Announces the selected cipher.
pub fn show_selected(cipher: &str) {
    println!("{}", style(format!("You have chosen the {cipher} cipher.")).bold());
}

/// Shows the Playfair keysquare derived from the keyword.
pub fn show_keysquare(square: &Keysquare) {
    println!("{}", style("Keysquare:").bold());
    for line in square.to_string().lines() {
        println!("  {}", style(line).yellow());
    }
}

pub fn show_goodbye(app_name: &str) {
    println!("{}", style(format!("Thank you for using {app_name}. Goodbye!")).green().bold());
}

/// Clears the terminal screen.
pub fn clear_screen() -> Result<()> {
    Term::stdout().clear_screen().map_err(|e| anyhow::anyhow!("failed to clear screen: {e}"))
}

/// Prints the application banner.
pub fn print_banner() {
    let banner = r"
  ____ _               _
 / ___| | __ _ ___ ___(_) ___ __ _
| |   | |/ _` / __/ __| |/ __/ _` |
| |___| | (_| \__ \__ \ | (_| (_| |
 \____|_|\__,_|___/___/_|\___\__,_|
";

    println!("{}", style(banner).green().bold());
    println!("{}", style("   Caesar · Affine · Vigenere · Playfair · Hill").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_table_lists_every_cipher() {
        let rendered = registry_table().to_string();
        for name in ["Caesar", "Affine", "Vigenere", "Playfair", "Hill"] {
            assert!(rendered.contains(name), "missing {name}");
        }
        assert!(rendered.contains("key1"));
        assert!(rendered.contains("matrix"));
    }

    #[test]
    fn test_registry_table_row_count() {
        // One row per declared parameter: 1 + 2 + 1 + 1 + 1.
        assert_eq!(registry_table().row_iter().count(), 6);
    }
}
