// src/rendering/scene.rs
//
// Turns a parsed structure into renderable primitives: one sphere per atom
// and the twelve edges of the unit cell.

use crate::error::SceneError;
use crate::model::{ElementTable, Structure};
use crate::utils::linalg::{self, Lattice, Vec3};

pub const CELL_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
pub const CELL_LINE_WIDTH: f64 = 1.5;

/// Corner `i` is the sum of a (bit 0), b (bit 1) and c (bit 2), giving
/// 0, a, b, a+b, c, a+c, b+c, a+b+c.
pub const CELL_EDGES: [(usize, usize); 12] = [
  (0, 1),
  (0, 2),
  (0, 4),
  (1, 3),
  (1, 5),
  (2, 3),
  (2, 6),
  (3, 7),
  (4, 5),
  (4, 6),
  (5, 7),
  (6, 7),
];

#[derive(Clone, Debug, PartialEq)]
pub enum ScenePrimitive {
  Sphere {
    center: Vec3,
    radius: f64,
    color: [f64; 4],
  },
  Line {
    start: Vec3,
    end: Vec3,
    color: [f64; 4],
    width: f64,
  },
}

/// Whatever draws the scene. The builder only ever pushes a full
/// replacement: clear, add everything, set the pivot.
pub trait Viewport {
  fn clear(&mut self);
  fn add_primitive(&mut self, primitive: ScenePrimitive);
  fn set_pivot(&mut self, pivot: Vec3);
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneOptions {
  /// Sphere radius for elements without a van der Waals radius.
  /// `None` turns that case into [`SceneError::MissingRadius`].
  pub fallback_radius: Option<f64>,
}

impl Default for SceneOptions {
  fn default() -> Self {
    Self {
      fallback_radius: Some(1.5),
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
  pub primitives: Vec<ScenePrimitive>,
  pub pivot: Vec3,
}

impl Scene {
  /// Replaces whatever the viewport showed before.
  pub fn present<V: Viewport + ?Sized>(self, viewport: &mut V) {
    viewport.clear();
    for p in self.primitives {
      viewport.add_primitive(p);
    }
    viewport.set_pivot(self.pivot);
  }
}

pub fn build_scene(
  structure: &Structure,
  table: &ElementTable,
  options: &SceneOptions,
) -> Result<Scene, SceneError> {
  let expected = structure.num_atoms().ok_or(SceneError::AtomCountOverflow)?;
  if structure.positions.len() != expected {
    return Err(SceneError::PositionMismatch {
      expected,
      found: structure.positions.len(),
    });
  }

  let mut primitives = Vec::with_capacity(expected + CELL_EDGES.len());

  let mut styles = Vec::with_capacity(structure.atom_types.len());
  for symbol in &structure.atom_types {
    let props = table.get(symbol)?;
    let radius = match (props.van_der_waals_radius, options.fallback_radius) {
      (Some(r), _) => r,
      (None, Some(fallback)) => {
        log::warn!("{} has no van der Waals radius, drawing with {:.2}", symbol, fallback);
        fallback
      }
      (None, None) => {
        return Err(SceneError::MissingRadius {
          symbol: symbol.clone(),
        })
      }
    };
    styles.push((radius, props.normalized_color()));
  }

  for atom in structure.atoms() {
    let (radius, color) = styles[atom.species];
    primitives.push(ScenePrimitive::Sphere {
      center: atom.position,
      radius,
      color,
    });
  }

  for (start, end) in cell_edges(&structure.lattice) {
    primitives.push(ScenePrimitive::Line {
      start,
      end,
      color: CELL_COLOR,
      width: CELL_LINE_WIDTH,
    });
  }

  Ok(Scene {
    primitives,
    pivot: structure.lattice_center(),
  })
}

pub fn lattice_corners(lattice: &Lattice) -> [Vec3; 8] {
  let [a, b, c] = *lattice;
  let mut corners = [[0.0; 3]; 8];
  for (i, corner) in corners.iter_mut().enumerate() {
    if i & 1 != 0 {
      *corner = linalg::add(*corner, a);
    }
    if i & 2 != 0 {
      *corner = linalg::add(*corner, b);
    }
    if i & 4 != 0 {
      *corner = linalg::add(*corner, c);
    }
  }
  corners
}

pub fn cell_edges(lattice: &Lattice) -> Vec<(Vec3, Vec3)> {
  let corners = lattice_corners(lattice);
  CELL_EDGES
    .iter()
    .map(|&(i, j)| (corners[i], corners[j]))
    .collect()
}
