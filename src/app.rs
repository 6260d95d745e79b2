use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use classica::cipher::{Cipher, CipherAlgorithm};
use classica::config::APP_NAME;
use classica::registry::{self, Entry, Params};
use classica::types::ProcessorMode;
use tracing::Level;

use crate::ui::prompt::{MenuChoice, Prompt};

#[derive(Args)]
pub struct OperationArgs {
    /// Cipher name (caesar, affine, vigenere, playfair, hill).
    #[arg(short, long)]
    cipher: String,

    /// Message to transform (prompted for if omitted).
    #[arg(short, long)]
    message: Option<String>,

    /// Cipher parameter as NAME=VALUE; repeat for each parameter.
    /// Missing parameters are prompted for.
    #[arg(short, long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a message.
    Encrypt(OperationArgs),

    /// Decrypt a message.
    Decrypt(OperationArgs),

    /// List the available ciphers and their parameters.
    List,

    /// Start the interactive menu.
    Interactive,
}

#[derive(Parser)]
#[command(name = "classica", version, about = "Encrypt and decrypt messages with classical ciphers: Caesar, Affine, Vigenere, Playfair and Hill.")]
pub struct App {
    /// Log cipher dispatch and key validation to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();
        let level = if app.verbose { Level::DEBUG } else { Level::WARN };
        let subscriber = tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(app)
    }

    pub fn execute(self) -> Result<()> {
        let prompt = Prompt::new();
        match self.command {
            Some(Commands::Encrypt(args)) => Self::run_mode(args, ProcessorMode::Encrypt, &prompt),
            Some(Commands::Decrypt(args)) => Self::run_mode(args, ProcessorMode::Decrypt, &prompt),
            Some(Commands::List) => {
                crate::ui::show_registry();
                Ok(())
            }
            Some(Commands::Interactive) | None => Self::run_interactive(&prompt),
        }
    }

    fn run_mode(args: OperationArgs, mode: ProcessorMode, prompt: &Prompt) -> Result<()> {
        let entry = registry::lookup(&args.cipher)?;
        let mut params = Self::parse_params(entry, &args.params)?;
        for spec in entry.params {
            if !params.contains(spec.name) {
                params.insert(spec.name, prompt.prompt_param(spec)?);
            }
        }

        let message = match args.message {
            Some(message) => message,
            None => prompt.prompt_message()?,
        };

        let cipher = entry.build(&params).with_context(|| format!("invalid {} parameters", entry.name()))?;
        let output = Self::process(&cipher, mode, &message)?;
        crate::ui::show_result(mode, entry.name(), &output);

        Ok(())
    }

    fn run_interactive(prompt: &Prompt) -> Result<()> {
        crate::ui::clear_screen()?;
        crate::ui::print_banner();

        loop {
            let entry = match prompt.select_cipher()? {
                MenuChoice::Cipher(entry) => entry,
                MenuChoice::Quit => break,
            };

            crate::ui::show_selected(entry.name());
            let mode = prompt.select_processing_mode()?;
            let message = prompt.prompt_message()?;

            let mut params = Params::new();
            for spec in entry.params {
                params.insert(spec.name, prompt.prompt_param(spec)?);
            }

            // Key errors are reported and the menu shown again.
            let cipher = match entry.build(&params) {
                Ok(cipher) => cipher,
                Err(e) => {
                    crate::ui::show_error(&e);
                    continue;
                }
            };

            if let Cipher::Playfair(playfair) = &cipher {
                crate::ui::show_keysquare(&playfair.keysquare());
            }

            match Self::process(&cipher, mode, &message) {
                Ok(output) => crate::ui::show_result(mode, entry.name(), &output),
                Err(e) => crate::ui::show_error(&format!("{e:#}")),
            }
        }

        crate::ui::show_goodbye(APP_NAME);
        Ok(())
    }

    fn process(cipher: &Cipher, mode: ProcessorMode, message: &str) -> Result<String> {
        cipher.apply(mode, message).with_context(|| format!("{} failed: {}", mode, cipher.kind()))
    }

    /// Parses `NAME=VALUE` pairs against the schema of `entry`.
    fn parse_params(entry: Entry, raw: &[String]) -> Result<Params> {
        let mut params = Params::new();
        for pair in raw {
            let Some((name, value)) = pair.split_once('=') else {
                bail!("parameter '{pair}' must be written as NAME=VALUE");
            };
            let name = name.trim();
            let Some(spec) = entry.params.iter().find(|p| p.name == name) else {
                let known: Vec<&str> = entry.params.iter().map(|p| p.name).collect();
                bail!("{} has no parameter '{name}' (expected: {})", entry.name(), known.join(", "));
            };
            params.insert(spec.name, spec.coerce(value)?);
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use classica::cipher::CipherKind;
    use classica::types::ParamValue;

    use super::*;

    #[test]
    fn test_parse_params() {
        let entry = registry::entry(CipherKind::Affine);
        let params = App::parse_params(entry, &["key1=5".into(), "key2 = -8".into()]).unwrap();
        assert_eq!(params.get("key1"), Some(&ParamValue::Integer(5)));
        assert_eq!(params.get("key2"), Some(&ParamValue::Integer(-8)));
    }

    #[test]
    fn test_parse_params_matrix_with_equals_free_value() {
        let entry = registry::entry(CipherKind::Hill);
        let params = App::parse_params(entry, &["matrix=6 24 1; 13 16 10; 20 17 15".into()]).unwrap();
        assert!(matches!(params.get("matrix"), Some(ParamValue::Matrix(_))));
    }

    #[test]
    fn test_parse_params_rejects_unknown_and_malformed() {
        let entry = registry::entry(CipherKind::Caesar);
        assert!(App::parse_params(entry, &["shift=3".into()]).is_err());
        assert!(App::parse_params(entry, &["key".into()]).is_err());
        assert!(App::parse_params(entry, &["key=three".into()]).is_err());
    }

    #[test]
    fn test_cli_parses_operation() {
        let app = App::try_parse_from(["classica", "encrypt", "-c", "caesar", "-m", "hello", "-p", "key=3"]).unwrap();
        let Some(Commands::Encrypt(args)) = app.command else {
            panic!("expected encrypt subcommand");
        };
        assert_eq!(args.cipher, "caesar");
        assert_eq!(args.message.as_deref(), Some("hello"));
        assert_eq!(args.params, vec!["key=3".to_string()]);
    }

    #[test]
    fn test_cli_defaults_to_interactive() {
        let app = App::try_parse_from(["classica"]).unwrap();
        assert!(app.command.is_none());
        assert!(!app.verbose);
    }

    #[test]
    fn test_process_reports_context() {
        let cipher = registry::lookup("playfair").unwrap().build(&Params::new().with("keyword", ParamValue::Text("key".into()))).unwrap();
        let err = App::process(&cipher, ProcessorMode::Decrypt, "abc").unwrap_err();
        assert_eq!(err.to_string(), "Decrypt failed: Playfair");
    }
}
