// src/rendering/view.rs

use super::camera::{project_primitives, Camera, CameraCommand, DrawItem};
use super::scene::{ScenePrimitive, Viewport};
use crate::utils::linalg::Vec3;

/// Retained scene plus camera. Owned by the window; the painter reads it
/// on every redraw.
#[derive(Clone, Debug)]
pub struct SceneViewport {
  primitives: Vec<ScenePrimitive>,
  pub camera: Camera,
}

impl SceneViewport {
  pub fn new(initial_distance: f64) -> Self {
    Self {
      primitives: Vec::new(),
      camera: Camera::new(initial_distance),
    }
  }

  pub fn primitives(&self) -> &[ScenePrimitive] {
    &self.primitives
  }

  pub fn apply(&mut self, command: CameraCommand) {
    self.camera.apply(command);
  }

  pub fn draw_items(&self, width: f64, height: f64) -> Vec<DrawItem> {
    project_primitives(&self.primitives, &self.camera, width, height)
  }
}

impl Viewport for SceneViewport {
  fn clear(&mut self) {
    self.primitives.clear();
  }

  fn add_primitive(&mut self, primitive: ScenePrimitive) {
    self.primitives.push(primitive);
  }

  fn set_pivot(&mut self, pivot: Vec3) {
    self.camera.set_pivot(pivot);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rendering::scene::Scene;

  #[test]
  fn presenting_a_scene_recenters_the_camera() {
    let mut vp = SceneViewport::new(30.0);
    vp.apply(CameraCommand::Zoom { factor: 2.0 });

    let scene = Scene {
      primitives: vec![ScenePrimitive::Sphere {
        center: [1.0, 1.0, 1.0],
        radius: 1.0,
        color: [1.0; 4],
      }],
      pivot: [1.0, 1.0, 1.0],
    };
    scene.present(&mut vp);

    assert_eq!(vp.primitives().len(), 1);
    assert_eq!(vp.camera.center, [1.0, 1.0, 1.0]);

    let items = vp.draw_items(640.0, 480.0);
    match &items[0] {
      DrawItem::Disc { x, y, .. } => {
        assert!((x - 320.0).abs() < 1e-9);
        assert!((y - 240.0).abs() < 1e-9);
      }
      other => panic!("expected disc, got {other:?}"),
    }
  }

  #[test]
  fn clear_empties_the_view() {
    let mut vp = SceneViewport::new(10.0);
    vp.add_primitive(ScenePrimitive::Line {
      start: [0.0; 3],
      end: [1.0; 3],
      color: [1.0; 4],
      width: 1.5,
    });
    assert!(!vp.primitives().is_empty());
    vp.clear();
    assert!(vp.primitives().is_empty());
  }
}
