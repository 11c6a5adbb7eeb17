// src/rendering/camera.rs
//
// Orbit camera around a pivot, plus the perspective projection the painter
// uses to turn scene primitives into 2D draw items.

use super::scene::ScenePrimitive;
use crate::utils::linalg::Vec3;
use nalgebra::{Isometry3, Point3, Vector3};
use std::cmp::Ordering;

const MIN_ELEVATION: f64 = -89.0;
const MAX_ELEVATION: f64 = 89.0;
const NEAR_PLANE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
  /// Degrees.
  Orbit { azimuth: f64, elevation: f64 },
  /// World units along the screen's right and up directions.
  Pan { right: f64, up: f64 },
  /// World units along the world z axis.
  PanVertical { dz: f64 },
  /// Multiplies the eye distance.
  Zoom { factor: f64 },
  Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
  pub center: Vec3,
  pub distance: f64,
  pub azimuth: f64,
  pub elevation: f64,
  /// Vertical field of view in degrees.
  pub fov: f64,
  home_center: Vec3,
  home_distance: f64,
}

impl Camera {
  pub const HOME_AZIMUTH: f64 = 45.0;
  pub const HOME_ELEVATION: f64 = 30.0;

  pub fn new(distance: f64) -> Self {
    Self {
      center: [0.0; 3],
      distance,
      azimuth: Self::HOME_AZIMUTH,
      elevation: Self::HOME_ELEVATION,
      fov: 60.0,
      home_center: [0.0; 3],
      home_distance: distance,
    }
  }

  /// New rotation pivot; also where `Reset` returns to.
  pub fn set_pivot(&mut self, pivot: Vec3) {
    self.center = pivot;
    self.home_center = pivot;
  }

  pub fn apply(&mut self, command: CameraCommand) {
    match command {
      CameraCommand::Orbit { azimuth, elevation } => {
        self.azimuth = (self.azimuth + azimuth).rem_euclid(360.0);
        self.elevation = (self.elevation + elevation).clamp(MIN_ELEVATION, MAX_ELEVATION);
      }
      CameraCommand::Pan { right, up } => {
        let (r, u) = self.screen_axes();
        let shift = r * right + u * up;
        self.center = [
          self.center[0] + shift.x,
          self.center[1] + shift.y,
          self.center[2] + shift.z,
        ];
      }
      CameraCommand::PanVertical { dz } => {
        self.center[2] += dz;
      }
      CameraCommand::Zoom { factor } => {
        if factor.is_finite() && factor > 0.0 {
          self.distance = (self.distance * factor).max(NEAR_PLANE * 10.0);
        }
      }
      CameraCommand::Reset => {
        self.center = self.home_center;
        self.distance = self.home_distance;
        self.azimuth = Self::HOME_AZIMUTH;
        self.elevation = Self::HOME_ELEVATION;
      }
    }
  }

  pub fn eye(&self) -> Point3<f64> {
    let (sa, ca) = self.azimuth.to_radians().sin_cos();
    let (se, ce) = self.elevation.to_radians().sin_cos();
    let offset = Vector3::new(ce * ca, ce * sa, se) * self.distance;
    Point3::from(self.center) + offset
  }

  fn view(&self) -> Isometry3<f64> {
    Isometry3::look_at_rh(&self.eye(), &Point3::from(self.center), &Vector3::z())
  }

  /// Unit vectors pointing screen-right and screen-up, in world space.
  fn screen_axes(&self) -> (Vector3<f64>, Vector3<f64>) {
    let forward = (Point3::from(self.center) - self.eye()).normalize();
    let right = forward.cross(&Vector3::z()).normalize();
    let up = right.cross(&forward);
    (right, up)
  }

  /// Size of one pixel at the pivot, in world units.
  pub fn world_per_pixel(&self, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
      return 0.0;
    }
    2.0 * self.distance * (self.fov.to_radians() / 2.0).tan() / viewport_height
  }

  /// Screen position, depth and pixels-per-world-unit of a point, or `None`
  /// when it is behind the camera.
  pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<Projected> {
    let v = self.view() * Point3::from(p);
    let depth = -v.z;
    if depth <= NEAR_PLANE {
      return None;
    }
    let focal = (height / 2.0) / (self.fov.to_radians() / 2.0).tan();
    let scale = focal / depth;
    Some(Projected {
      x: width / 2.0 + v.x * scale,
      y: height / 2.0 - v.y * scale,
      depth,
      scale,
    })
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
  pub x: f64,
  pub y: f64,
  pub depth: f64,
  pub scale: f64,
}

/// 2D item for the painter, already in pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawItem {
  Disc {
    x: f64,
    y: f64,
    radius: f64,
    color: [f64; 4],
    depth: f64,
  },
  Stroke {
    from: (f64, f64),
    to: (f64, f64),
    color: [f64; 4],
    width: f64,
    depth: f64,
  },
}

impl DrawItem {
  pub fn depth(&self) -> f64 {
    match self {
      DrawItem::Disc { depth, .. } | DrawItem::Stroke { depth, .. } => *depth,
    }
  }
}

/// Projects every primitive and sorts far to near (painter's algorithm).
pub fn project_primitives(
  primitives: &[ScenePrimitive],
  camera: &Camera,
  width: f64,
  height: f64,
) -> Vec<DrawItem> {
  let mut items: Vec<DrawItem> = primitives
    .iter()
    .filter_map(|p| match *p {
      ScenePrimitive::Sphere {
        center,
        radius,
        color,
      } => camera.project(center, width, height).map(|s| DrawItem::Disc {
        x: s.x,
        y: s.y,
        radius: radius * s.scale,
        color,
        depth: s.depth,
      }),
      ScenePrimitive::Line {
        start,
        end,
        color,
        width: line_width,
      } => {
        let a = camera.project(start, width, height)?;
        let b = camera.project(end, width, height)?;
        Some(DrawItem::Stroke {
          from: (a.x, a.y),
          to: (b.x, b.y),
          color,
          width: line_width,
          depth: (a.depth + b.depth) / 2.0,
        })
      }
    })
    .collect();

  items.sort_by(|a, b| b.depth().partial_cmp(&a.depth()).unwrap_or(Ordering::Equal));
  items
}
