// src/generate.rs
//
// Builds the element property table from the built-in catalogue.

use crate::error::TableGenerationError;
use crate::model::catalogue::{self, CatalogueEntry};
use crate::model::{ElementProperties, ElementTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used when none is given, so regenerating the table is reproducible.
pub const DEFAULT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct Generated {
  pub table: ElementTable,
  pub skipped: Vec<TableGenerationError>,
}

/// Random opaque color: R, G, B uniform in 0..=255, alpha 255.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> [u8; 4] {
  [
    rng.gen_range(0..=255),
    rng.gen_range(0..=255),
    rng.gen_range(0..=255),
    255,
  ]
}

pub fn record_for<R: Rng + ?Sized>(
  entry: &CatalogueEntry,
  rng: &mut R,
) -> Result<ElementProperties, TableGenerationError> {
  let fail = |reason: String| TableGenerationError {
    symbol: entry.symbol.to_string(),
    reason,
  };

  if !(entry.atomic_mass.is_finite() && entry.atomic_mass > 0.0) {
    return Err(fail(format!("invalid atomic mass {}", entry.atomic_mass)));
  }
  let electronic_structure = catalogue::electronic_structure(entry.number).map_err(fail)?;

  Ok(ElementProperties {
    atomic_mass: entry.atomic_mass,
    atomic_radius: entry.atomic_radius,
    van_der_waals_radius: entry.van_der_waals_radius,
    electronic_structure: Some(electronic_structure),
    color: random_color(rng),
    number_of_electrons: entry.number,
  })
}

/// One record per entry. Entries that fail are logged and skipped; the
/// batch itself never fails.
pub fn build_table<R: Rng + ?Sized>(entries: &[CatalogueEntry], rng: &mut R) -> Generated {
  let mut table = ElementTable::new();
  let mut skipped = Vec::new();

  for entry in entries {
    match record_for(entry, rng) {
      Ok(props) => {
        log::debug!("{} ({}), Z = {}", entry.name, entry.symbol, entry.number);
        table.insert(entry.symbol, props)
      }
      Err(e) => {
        log::warn!("{}", e);
        skipped.push(e);
      }
    }
  }

  Generated { table, skipped }
}

pub fn build_seeded(seed: u64) -> Generated {
  let mut rng = StdRng::seed_from_u64(seed);
  build_table(&catalogue::ELEMENTS, &mut rng)
}
