// src/model/elements.rs

use crate::error::UnknownElementError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One occupied subshell, stored on disk as `[n, "l", electrons]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orbital(pub u8, pub char, pub u8);

impl Orbital {
  pub fn l(&self) -> char {
    self.1
  }

  pub fn electrons(&self) -> u8 {
    self.2
  }
}

/// Per-element record of the property table.
///
/// Absent values are `None` in memory and the literal `"unknown"` on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementProperties {
  pub atomic_mass: f64,
  #[serde(with = "unknown")]
  pub atomic_radius: Option<f64>,
  #[serde(with = "unknown")]
  pub van_der_waals_radius: Option<f64>,
  #[serde(with = "unknown")]
  pub electronic_structure: Option<Vec<Orbital>>,
  /// RGBA, 0..=255
  pub color: [u8; 4],
  /// Atomic number Z.
  pub number_of_electrons: u32,
}

impl ElementProperties {
  /// Color with each channel scaled to 0..=1.
  pub fn normalized_color(&self) -> [f64; 4] {
    self.color.map(|c| c as f64 / 255.0)
  }
}

/// Symbol -> record. Read-only once loaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementTable {
  entries: BTreeMap<String, ElementProperties>,
}

impl ElementTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, symbol: impl Into<String>, props: ElementProperties) {
    self.entries.insert(symbol.into(), props);
  }

  pub fn get(&self, symbol: &str) -> Result<&ElementProperties, UnknownElementError> {
    self.entries.get(symbol).ok_or_else(|| UnknownElementError {
      symbol: symbol.to_string(),
    })
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementProperties)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v))
  }
}

/// serde adapter: `None` <-> `"unknown"`.
pub mod unknown {
  use serde::de::Error;
  use serde::{Deserialize, Deserializer, Serialize, Serializer};

  pub const MARKER: &str = "unknown";

  pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
  where
    T: Serialize,
    S: Serializer,
  {
    match value {
      Some(v) => v.serialize(serializer),
      None => serializer.serialize_str(MARKER),
    }
  }

  pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
  where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
  {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field<T> {
      Known(T),
      Marker(String),
    }

    match Option::<Field<T>>::deserialize(deserializer)? {
      None => Ok(None),
      Some(Field::Known(v)) => Ok(Some(v)),
      Some(Field::Marker(s)) if s == MARKER => Ok(None),
      Some(Field::Marker(s)) => Err(D::Error::custom(format!(
        "expected a value or \"{}\", found \"{}\"",
        MARKER, s
      ))),
    }
  }
}
