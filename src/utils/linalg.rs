// src/utils/linalg.rs

use nalgebra::{Matrix3, Vector3};

pub type Vec3 = [f64; 3];
pub type Lattice = [[f64; 3]; 3];

/// Volumes below this are treated as a collapsed cell.
pub const DEGENERATE_VOLUME: f64 = 1e-8;

fn lattice_matrix(lattice: &Lattice) -> Matrix3<f64> {
  Matrix3::from_row_slice(&[
    lattice[0][0],
    lattice[0][1],
    lattice[0][2],
    lattice[1][0],
    lattice[1][1],
    lattice[1][2],
    lattice[2][0],
    lattice[2][1],
    lattice[2][2],
  ])
}

/// Convert fractional coordinates to Cartesian.
///
/// `lattice` holds the cell vectors as rows, so this is the row vector
/// `frac · lattice`, i.e. `Lattice^T × Fractional`.
pub fn frac_to_cart(frac: Vec3, lattice: &Lattice) -> Vec3 {
  let cart = lattice_matrix(lattice).transpose() * Vector3::from(frac);
  [cart.x, cart.y, cart.z]
}

/// Signed cell volume `a · (b × c)`.
pub fn cell_volume(lattice: &Lattice) -> f64 {
  lattice_matrix(lattice).determinant()
}

pub fn is_degenerate(lattice: &Lattice) -> bool {
  cell_volume(lattice).abs() < DEGENERATE_VOLUME
}

/// Arithmetic mean of the three cell vectors.
pub fn lattice_mean(lattice: &Lattice) -> Vec3 {
  let sum = Vector3::from(lattice[0]) + Vector3::from(lattice[1]) + Vector3::from(lattice[2]);
  let mean = sum / 3.0;
  [mean.x, mean.y, mean.z]
}

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
  [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_cubic_lattice() {
    let lattice = [[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]];
    let cart = frac_to_cart([0.5, 0.5, 0.5], &lattice);

    assert!((cart[0] - 2.5).abs() < 1e-10);
    assert!((cart[1] - 2.5).abs() < 1e-10);
    assert!((cart[2] - 2.5).abs() < 1e-10);
  }

  #[test]
  fn test_frac_is_row_vector_times_lattice() {
    // Hexagonal-ish cell: b has an x component, so the order matters.
    let lattice = [[4.0, 0.0, 0.0], [2.0, 3.46, 0.0], [0.0, 0.0, 5.0]];
    let cart = frac_to_cart([0.0, 1.0, 0.0], &lattice);
    assert!((cart[0] - 2.0).abs() < 1e-12);
    assert!((cart[1] - 3.46).abs() < 1e-12);
  }

  #[test]
  fn test_degenerate_cell() {
    let flat = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];
    assert!(is_degenerate(&flat));

    let cubic = [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]];
    assert!((cell_volume(&cubic) - 8.0).abs() < 1e-12);
    assert!(!is_degenerate(&cubic));
  }

  #[test]
  fn test_lattice_mean() {
    let lattice = [[3.0, 0.0, 0.0], [0.0, 6.0, 0.0], [1.5, 0.0, 9.0]];
    let m = lattice_mean(&lattice);
    assert!((m[0] - 1.5).abs() < 1e-12);
    assert!((m[1] - 2.0).abs() < 1e-12);
    assert!((m[2] - 3.0).abs() < 1e-12);
  }
}
