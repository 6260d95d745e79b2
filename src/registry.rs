//! Dispatch registry.
//!
//! Maps each cipher identifier to its parameter schema and to the typed
//! [`Cipher`] built from validated parameters. Callers coerce raw text with
//! [`ParamSpec::coerce`], collect the values into [`Params`], then call
//! [`Entry::build`] and run the operation on the result.

use std::str::FromStr;

use hashbrown::HashMap;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::cipher::{Affine, Caesar, Cipher, CipherAlgorithm, CipherKind, Hill, Playfair, Vigenere};
use crate::config::HILL_ORDER;
use crate::error::{CipherError, Result};
use crate::types::{ParamKind, ParamValue, ProcessorMode};

/// Declaration of one cipher parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub required: bool,
    pub kind: ParamKind,
}

impl ParamSpec {
    const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self { name, required: true, kind }
    }

    /// Converts raw user text into a value of this parameter's kind.
    ///
    /// Text values are lower-cased. Matrices are written as rows separated
    /// by `;` (`"6 24 1; 13 16 10; 20 17 15"`) or as `n²` numbers separated
    /// by whitespace or commas.
    ///
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] when the text is empty or does not
    /// parse as the declared kind.
    pub fn coerce(&self, raw: &str) -> Result<ParamValue> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CipherError::MalformedInput(format!("parameter '{}' must not be empty", self.name)));
        }

        match self.kind {
            ParamKind::Integer => {
                raw.parse::<i64>().map(ParamValue::Integer).map_err(|_| CipherError::MalformedInput(format!("parameter '{}' must be an integer, got '{raw}'", self.name)))
            }
            ParamKind::Text => Ok(ParamValue::Text(raw.to_lowercase())),
            ParamKind::Matrix => parse_matrix(raw, HILL_ORDER).map(ParamValue::Matrix).map_err(|e| match e {
                CipherError::MalformedInput(msg) => CipherError::MalformedInput(format!("parameter '{}': {msg}", self.name)),
                other => other,
            }),
        }
    }
}

fn parse_number(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| CipherError::MalformedInput(format!("'{token}' is not an integer")))
}

fn split_numbers(text: &str) -> Result<Vec<i64>> {
    text.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()).map(parse_number).collect()
}

/// Parses an `order × order` integer matrix.
///
/// # Errors
///
/// [`CipherError::MalformedInput`] for non-integer entries or the wrong shape.
pub fn parse_matrix(text: &str, order: usize) -> Result<Vec<Vec<i64>>> {
    let text = text.trim().trim_start_matches('[').trim_end_matches(']');

    let rows: Vec<Vec<i64>> = if text.contains(';') {
        text.split(';').map(str::trim).filter(|r| !r.is_empty()).map(|r| split_numbers(r.trim_matches(|c: char| c == '[' || c == ']'))).collect::<Result<_>>()?
    } else {
        let flat = split_numbers(&text.replace(['[', ']'], " "))?;
        if flat.len() != order * order {
            return Err(CipherError::MalformedInput(format!("expected {} numbers for a {order}x{order} matrix, got {}", order * order, flat.len())));
        }
        flat.chunks(order).map(<[i64]>::to_vec).collect()
    };

    if rows.len() != order || rows.iter().any(|r| r.len() != order) {
        return Err(CipherError::MalformedInput(format!("matrix must be {order}x{order}")));
    }
    Ok(rows)
}

/// Named parameter values for one cipher invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: &str, value: ParamValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: ParamValue) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn integer(&self, spec: &ParamSpec) -> Result<i64> {
        match self.fetch(spec)? {
            ParamValue::Integer(v) => Ok(*v),
            other => Err(mistyped(spec, other)),
        }
    }

    fn text(&self, spec: &ParamSpec) -> Result<&str> {
        match self.fetch(spec)? {
            ParamValue::Text(v) => Ok(v.as_str()),
            other => Err(mistyped(spec, other)),
        }
    }

    fn matrix(&self, spec: &ParamSpec) -> Result<&[Vec<i64>]> {
        match self.fetch(spec)? {
            ParamValue::Matrix(v) => Ok(v.as_slice()),
            other => Err(mistyped(spec, other)),
        }
    }

    fn fetch(&self, spec: &ParamSpec) -> Result<&ParamValue> {
        self.get(spec.name).ok_or_else(|| CipherError::MalformedInput(format!("missing required parameter '{}'", spec.name)))
    }
}

fn mistyped(spec: &ParamSpec, value: &ParamValue) -> CipherError {
    CipherError::MalformedInput(format!("parameter '{}' must be {}, got {}", spec.name, spec.kind, value.kind()))
}

const CAESAR_PARAMS: &[ParamSpec] = &[ParamSpec::required("key", ParamKind::Integer)];
const AFFINE_PARAMS: &[ParamSpec] = &[ParamSpec::required("key1", ParamKind::Integer), ParamSpec::required("key2", ParamKind::Integer)];
const VIGENERE_PARAMS: &[ParamSpec] = &[ParamSpec::required("key", ParamKind::Text)];
const PLAYFAIR_PARAMS: &[ParamSpec] = &[ParamSpec::required("keyword", ParamKind::Text)];
const HILL_PARAMS: &[ParamSpec] = &[ParamSpec::required("matrix", ParamKind::Matrix)];

/// One registry row: a cipher and its declared parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub kind: CipherKind,
    pub params: &'static [ParamSpec],
}

impl Entry {
    pub fn name(&self) -> &'static str {
        self.kind.into()
    }

    /// Checks `params` against the schema and builds the typed cipher.
    ///
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] for missing or mistyped parameters,
    /// [`CipherError::InvalidKey`] when a key fails its mathematical precondition.
    pub fn build(&self, params: &Params) -> Result<Cipher> {
        let p = self.params;
        debug!(cipher = %self.kind, "building cipher");
        let cipher: Cipher = match self.kind {
            CipherKind::Caesar => Caesar::new(params.integer(&p[0])?).into(),
            CipherKind::Affine => Affine::new(params.integer(&p[0])?, params.integer(&p[1])?)?.into(),
            CipherKind::Vigenere => Vigenere::new(params.text(&p[0])?)?.into(),
            CipherKind::Playfair => Playfair::new(params.text(&p[0])?).into(),
            CipherKind::Hill => {
                let rows = params.matrix(&p[0])?;
                if rows.len() != HILL_ORDER || rows.iter().any(|r| r.len() != HILL_ORDER) {
                    return Err(CipherError::MalformedInput(format!("parameter '{}' must be a {HILL_ORDER}x{HILL_ORDER} matrix", p[0].name)));
                }
                Hill::from_rows(rows)?.into()
            }
        };
        Ok(cipher)
    }

    /// Builds the cipher and runs one operation on `message`.
    ///
    /// # Errors
    ///
    /// As [`Entry::build`], plus any error from the operation itself.
    pub fn run(&self, mode: ProcessorMode, message: &str, params: &Params) -> Result<String> {
        self.build(params)?.apply(mode, message)
    }
}

/// Declared parameters of `kind`.
pub fn schema(kind: CipherKind) -> &'static [ParamSpec] {
    match kind {
        CipherKind::Caesar => CAESAR_PARAMS,
        CipherKind::Affine => AFFINE_PARAMS,
        CipherKind::Vigenere => VIGENERE_PARAMS,
        CipherKind::Playfair => PLAYFAIR_PARAMS,
        CipherKind::Hill => HILL_PARAMS,
    }
}

/// The registry entry for `kind`.
pub fn entry(kind: CipherKind) -> Entry {
    Entry { kind, params: schema(kind) }
}

/// All entries in menu order.
pub fn entries() -> impl Iterator<Item = Entry> {
    CipherKind::iter().map(entry)
}

/// Looks up a cipher by name, ignoring case.
///
/// # Errors
///
/// [`CipherError::MalformedInput`] for an unknown name.
pub fn lookup(name: &str) -> Result<Entry> {
    CipherKind::from_str(name.trim()).map(entry).map_err(|_| CipherError::MalformedInput(format!("unknown cipher '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_matches_declared_table() {
        let table: Vec<(&str, Vec<(&str, ParamKind)>)> = entries().map(|e| (e.name(), e.params.iter().map(|p| (p.name, p.kind)).collect())).collect();
        assert_eq!(
            table,
            vec![
                ("Caesar", vec![("key", ParamKind::Integer)]),
                ("Affine", vec![("key1", ParamKind::Integer), ("key2", ParamKind::Integer)]),
                ("Vigenere", vec![("key", ParamKind::Text)]),
                ("Playfair", vec![("keyword", ParamKind::Text)]),
                ("Hill", vec![("matrix", ParamKind::Matrix)]),
            ]
        );
        assert!(entries().all(|e| e.params.iter().all(|p| p.required)));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("playfair").unwrap().kind, CipherKind::Playfair);
        assert_eq!(lookup(" Cesar ").unwrap().kind, CipherKind::Caesar);
        assert!(matches!(lookup("rot13"), Err(CipherError::MalformedInput(_))));
    }

    #[test]
    fn test_coerce_integer() {
        let spec = ParamSpec::required("key", ParamKind::Integer);
        assert_eq!(spec.coerce(" -3 ").unwrap(), ParamValue::Integer(-3));
        assert!(matches!(spec.coerce("three"), Err(CipherError::MalformedInput(_))));
        assert!(matches!(spec.coerce(""), Err(CipherError::MalformedInput(_))));
    }

    #[test]
    fn test_coerce_text_lowercases() {
        let spec = ParamSpec::required("keyword", ParamKind::Text);
        assert_eq!(spec.coerce("PlayFair").unwrap(), ParamValue::Text("playfair".into()));
        assert!(matches!(spec.coerce("   "), Err(CipherError::MalformedInput(_))));
    }

    #[test]
    fn test_coerce_matrix_formats() {
        let spec = ParamSpec::required("matrix", ParamKind::Matrix);
        let expected = ParamValue::Matrix(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]);
        assert_eq!(spec.coerce("6 24 1; 13 16 10; 20 17 15").unwrap(), expected);
        assert_eq!(spec.coerce("6,24,1,13,16,10,20,17,15").unwrap(), expected);
        assert_eq!(spec.coerce("[[6, 24, 1], [13, 16, 10], [20, 17, 15]]").unwrap(), expected);
        assert_eq!(spec.coerce("[6 24 1; 13 16 10; 20 17 15]").unwrap(), expected);
    }

    #[test]
    fn test_coerce_matrix_rejects_bad_shape() {
        let spec = ParamSpec::required("matrix", ParamKind::Matrix);
        assert!(matches!(spec.coerce("1 2 3; 4 5 6"), Err(CipherError::MalformedInput(_))));
        assert!(matches!(spec.coerce("1 2; 3 4; 5 6"), Err(CipherError::MalformedInput(_))));
        assert!(matches!(spec.coerce("1 2 3 4"), Err(CipherError::MalformedInput(_))));
        assert!(matches!(spec.coerce("1 2 x; 4 5 6; 7 8 9"), Err(CipherError::MalformedInput(_))));
    }

    #[test]
    fn test_build_reports_missing_parameter() {
        let err = entry(CipherKind::Affine).build(&Params::new().with("key1", ParamValue::Integer(5))).unwrap_err();
        assert_eq!(err, CipherError::MalformedInput("missing required parameter 'key2'".into()));
    }

    #[test]
    fn test_build_reports_mistyped_parameter() {
        let err = entry(CipherKind::Caesar).build(&Params::new().with("key", ParamValue::Text("three".into()))).unwrap_err();
        assert_eq!(err, CipherError::MalformedInput("parameter 'key' must be integer, got text".into()));
    }

    #[test]
    fn test_build_rejects_wrong_matrix_order() {
        let params = Params::new().with("matrix", ParamValue::Matrix(vec![vec![3, 3], vec![2, 5]]));
        assert!(matches!(entry(CipherKind::Hill).build(&params), Err(CipherError::MalformedInput(_))));
    }

    #[test]
    fn test_build_propagates_invalid_key() {
        let affine = Params::new().with("key1", ParamValue::Integer(13)).with("key2", ParamValue::Integer(1));
        assert!(matches!(entry(CipherKind::Affine).build(&affine), Err(CipherError::InvalidKey(_))));

        let hill = Params::new().with("matrix", ParamValue::Matrix(vec![vec![0; 3]; 3]));
        assert!(matches!(entry(CipherKind::Hill).build(&hill), Err(CipherError::InvalidKey(_))));

        let vigenere = Params::new().with("key", ParamValue::Text("42".into()));
        assert!(matches!(entry(CipherKind::Vigenere).build(&vigenere), Err(CipherError::InvalidKey(_))));
    }

    #[test]
    fn test_run_end_to_end_from_raw_text() {
        let entry = lookup("hill").unwrap();
        let mut params = Params::new();
        for spec in entry.params {
            params.insert(spec.name, spec.coerce("6 24 1; 13 16 10; 20 17 15").unwrap());
        }
        assert_eq!(entry.run(ProcessorMode::Encrypt, "act", &params).unwrap(), "POH");
        assert_eq!(entry.run(ProcessorMode::Decrypt, "POH", &params).unwrap(), "act");
    }

    #[test]
    fn test_run_each_cipher() {
        let caesar = Params::new().with("key", ParamValue::Integer(3));
        assert_eq!(lookup("caesar").unwrap().run(ProcessorMode::Encrypt, "abc", &caesar).unwrap(), "def");

        let affine = Params::new().with("key1", ParamValue::Integer(5)).with("key2", ParamValue::Integer(8));
        assert_eq!(lookup("affine").unwrap().run(ProcessorMode::Encrypt, "affine", &affine).unwrap(), "ihhwvc");

        let vigenere = Params::new().with("key", ParamValue::Text("key".into()));
        assert_eq!(lookup("vigenere").unwrap().run(ProcessorMode::Encrypt, "hello", &vigenere).unwrap(), "rijvs");

        let playfair = Params::new().with("keyword", ParamValue::Text("playfair".into()));
        assert_eq!(lookup("playfair").unwrap().run(ProcessorMode::Encrypt, "hide the gold", &playfair).unwrap(), "EBIMQMGHVRCZ");
    }
}
