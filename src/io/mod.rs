// src/io/mod.rs
pub mod elements;
pub mod poscar;

use crate::error::ParseError;
use crate::model::{ElementTable, Structure};
use std::path::Path;

/// Parses a POSCAR and checks every species against the property table.
pub fn load_structure(path: impl AsRef<Path>, table: &ElementTable) -> Result<Structure, ParseError> {
  let structure = poscar::parse(path)?;
  check_species(&structure, table)?;
  Ok(structure)
}

pub fn check_species(structure: &Structure, table: &ElementTable) -> Result<(), ParseError> {
  for symbol in &structure.atom_types {
    table.get(symbol).map_err(|source| ParseError::UnknownElement {
      line: poscar::SYMBOL_LINE,
      source,
    })?;
  }
  Ok(())
}
