// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// An atom type that has no record in the element property table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("element '{symbol}' has no entry in the property table")]
pub struct UnknownElementError {
  pub symbol: String,
}

/// Failure while reading a POSCAR file. `line` is the 0-based line index.
#[derive(Debug, Error)]
pub enum ParseError {
  #[error("could not read {path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("line {line}: unexpected end of file, expected {expected}")]
  UnexpectedEof { line: usize, expected: &'static str },

  #[error("line {line}: invalid {field} '{token}'")]
  InvalidNumber {
    line: usize,
    field: &'static str,
    token: String,
  },

  #[error("line {line}: {field} needs {expected} values, found {found}")]
  MissingValues {
    line: usize,
    field: &'static str,
    expected: usize,
    found: usize,
  },

  #[error("line {line}: scale factor must be non-zero")]
  ZeroScale { line: usize },

  #[error("line {line}: expected element symbols, found '{found}'")]
  MissingSymbols { line: usize, found: String },

  #[error("line {line}: {found} atom counts given for {expected} element symbols")]
  CountMismatch {
    line: usize,
    expected: usize,
    found: usize,
  },

  #[error("line {line}: atom count for '{symbol}' must be positive")]
  EmptySpecies { line: usize, symbol: String },

  #[error("line {line}: atom counts add up to more than {max} atoms", max = usize::MAX)]
  AtomCountOverflow { line: usize },

  #[error("coordinate block starting at line {line}: expected {expected} positions, found {found}")]
  MissingPositions {
    line: usize,
    expected: usize,
    found: usize,
  },

  #[error("line {line}: {source}")]
  UnknownElement {
    line: usize,
    #[source]
    source: UnknownElementError,
  },

  #[error("lattice vectors are not linearly independent (cell volume {volume:.3e})")]
  DegenerateLattice { volume: f64 },
}

#[derive(Debug, Error)]
pub enum SceneError {
  #[error(transparent)]
  UnknownElement(#[from] UnknownElementError),

  #[error("atom counts add up to more than {max} atoms", max = usize::MAX)]
  AtomCountOverflow,

  #[error("element '{symbol}' has no van der Waals radius and no fallback radius is configured")]
  MissingRadius { symbol: String },

  #[error("structure lists {expected} atoms but carries {found} positions")]
  PositionMismatch { expected: usize, found: usize },
}

/// Failure to read the element property table. Fatal at viewer startup.
#[derive(Debug, Error)]
pub enum TableLoadError {
  #[error("could not open element table {path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed element table {path:?}: {source}")]
  Json {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("element table {path:?} contains no elements")]
  Empty { path: PathBuf },

  #[error("element table entry '{symbol}': {reason}")]
  InvalidEntry { symbol: String, reason: String },
}

/// A single catalogue element that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("could not process element {symbol}: {reason}")]
pub struct TableGenerationError {
  pub symbol: String,
  pub reason: String,
}

/// Everything that can go wrong between picking a file and showing it.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error(transparent)]
  Parse(#[from] ParseError),

  #[error(transparent)]
  Scene(#[from] SceneError),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_errors_name_their_line() {
    let err = ParseError::InvalidNumber {
      line: 1,
      field: "scale factor",
      token: "abc".into(),
    };
    assert_eq!(err.to_string(), "line 1: invalid scale factor 'abc'");
  }

  #[test]
  fn unknown_element_keeps_symbol_through_wrappers() {
    let inner = UnknownElementError { symbol: "Xq".into() };
    let parse = ParseError::UnknownElement {
      line: 5,
      source: inner.clone(),
    };
    assert!(parse.to_string().contains("'Xq'"));

    let load = LoadError::from(SceneError::from(inner));
    assert_eq!(
      load.to_string(),
      "element 'Xq' has no entry in the property table"
    );
  }
}
