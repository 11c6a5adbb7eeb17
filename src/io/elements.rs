// src/io/elements.rs
//
// JSON persistence for the element property table.

use crate::error::TableLoadError;
use crate::model::ElementTable;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

pub fn load(path: impl AsRef<Path>) -> Result<ElementTable, TableLoadError> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|source| TableLoadError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let table: ElementTable =
    serde_json::from_reader(BufReader::new(file)).map_err(|source| TableLoadError::Json {
      path: path.to_path_buf(),
      source,
    })?;

  if table.is_empty() {
    return Err(TableLoadError::Empty {
      path: path.to_path_buf(),
    });
  }
  validate(&table)?;

  log::info!("Loaded {} elements from {:?}", table.len(), path);
  Ok(table)
}

/// Checks that serde's types alone cannot express.
fn validate(table: &ElementTable) -> Result<(), TableLoadError> {
  for (symbol, props) in table.iter() {
    let invalid = |reason: String| TableLoadError::InvalidEntry {
      symbol: symbol.to_string(),
      reason,
    };
    if !(props.atomic_mass.is_finite() && props.atomic_mass > 0.0) {
      return Err(invalid(format!("atomic_mass {} is not positive", props.atomic_mass)));
    }
    if props.number_of_electrons == 0 {
      return Err(invalid("number_of_electrons must be positive".to_string()));
    }
    for (field, radius) in [
      ("atomic_radius", props.atomic_radius),
      ("van_der_waals_radius", props.van_der_waals_radius),
    ] {
      if let Some(r) = radius {
        if !(r.is_finite() && r > 0.0) {
          return Err(invalid(format!("{} {} is not positive", field, r)));
        }
      }
    }
  }
  Ok(())
}

/// Writes the table with 4-space indentation, replacing any existing file.
pub fn save(path: impl AsRef<Path>, table: &ElementTable) -> io::Result<()> {
  let mut writer = BufWriter::new(File::create(path)?);
  let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
  let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
  table.serialize(&mut ser).map_err(io::Error::from)?;
  writeln!(writer)?;
  writer.flush()
}
