// src/model/structure.rs

use crate::utils::linalg::{self, Lattice, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateMode {
  /// Fractional coordinates along the lattice vectors.
  Direct,
  /// Absolute positions in the lattice's length units.
  Cartesian,
}

/// A parsed POSCAR. Positions are always absolute Cartesian, grouped by
/// species in the order of `atom_types`.
#[derive(Clone, Debug)]
pub struct Structure {
  pub comment: String,
  // Lattice vectors: [a_vec, b_vec, c_vec], already scaled
  pub lattice: Lattice,
  pub atom_types: Vec<String>,
  pub atom_counts: Vec<usize>,
  pub positions: Vec<Vec3>,
  pub coordinate_mode: CoordinateMode,
  pub selective_dynamics: bool,
}

/// One site, borrowed from a [`Structure`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atom<'a> {
  pub element: &'a str,
  /// Index into `atom_types`.
  pub species: usize,
  pub position: Vec3,
  pub index: usize,
}

impl Structure {
  /// `None` when the counts overflow `usize`.
  pub fn num_atoms(&self) -> Option<usize> {
    total_atoms(&self.atom_counts)
  }

  /// Rotation pivot for the camera: the mean of a, b and c.
  ///
  /// This is not the centroid of the cell's eight corners (that would be
  /// `(a + b + c) / 2`).
  pub fn lattice_center(&self) -> Vec3 {
    linalg::lattice_mean(&self.lattice)
  }

  pub fn volume(&self) -> f64 {
    linalg::cell_volume(&self.lattice).abs()
  }

  /// Atoms in (type, index-within-type) order.
  pub fn atoms(&self) -> impl Iterator<Item = Atom<'_>> + '_ {
    self
      .atom_types
      .iter()
      .zip(&self.atom_counts)
      .enumerate()
      .flat_map(|(species, (symbol, &count))| std::iter::repeat((species, symbol.as_str())).take(count))
      .zip(&self.positions)
      .enumerate()
      .map(|(index, ((species, element), &position))| Atom {
        element,
        species,
        position,
        index,
      })
  }

  /// e.g. "Ti1 O2"
  pub fn formula(&self) -> String {
    self
      .atom_types
      .iter()
      .zip(&self.atom_counts)
      .map(|(s, c)| format!("{}{}", s, c))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

/// Sum of per-species counts, `None` on overflow.
pub fn total_atoms(counts: &[usize]) -> Option<usize> {
  counts.iter().try_fold(0usize, |acc, &c| acc.checked_add(c))
}
