// src/interactions.rs
//
// Input gesture -> camera command table. The toolkit layer only reports
// what happened (button, modifiers, pixel deltas); this decides what it means.

use crate::rendering::{Camera, CameraCommand};

/// Degrees of rotation per dragged pixel.
pub const ORBIT_SENSITIVITY: f64 = 0.5;
/// Distance multiplier per scroll step.
pub const ZOOM_STEP: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
  Primary,
  Middle,
  Secondary,
}

impl MouseButton {
  /// GDK/X11 button numbering.
  pub fn from_index(index: u32) -> Option<Self> {
    match index {
      1 => Some(MouseButton::Primary),
      2 => Some(MouseButton::Middle),
      3 => Some(MouseButton::Secondary),
      _ => None,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
  Drag { button: MouseButton, shift: bool },
  Scroll,
  DoubleClick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraAction {
  Rotate,
  Pan,
  VerticalPan,
  Zoom,
  Reset,
}

impl CameraAction {
  fn label(self) -> &'static str {
    match self {
      CameraAction::Rotate => "Rotate",
      CameraAction::Pan => "Pan",
      CameraAction::VerticalPan => "Vertical Pan",
      CameraAction::Zoom => "Zoom",
      CameraAction::Reset => "Reset View",
    }
  }
}

fn describe(gesture: Gesture) -> String {
  match gesture {
    Gesture::Drag { button, shift } => {
      let button = match button {
        MouseButton::Primary => "Left",
        MouseButton::Middle => "Middle",
        MouseButton::Secondary => "Right",
      };
      if shift {
        format!("Shift + {}-click and drag", button)
      } else {
        format!("{}-click and drag", button)
      }
    }
    Gesture::Scroll => "Scroll mouse wheel".to_string(),
    Gesture::DoubleClick => "Double-click".to_string(),
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureBindings {
  bindings: Vec<(Gesture, CameraAction)>,
}

impl Default for GestureBindings {
  fn default() -> Self {
    use CameraAction::*;
    use MouseButton::*;
    Self {
      bindings: vec![
        (Gesture::Scroll, Zoom),
        (Gesture::Drag { button: Primary, shift: false }, Rotate),
        (Gesture::Drag { button: Secondary, shift: false }, Pan),
        (Gesture::Drag { button: Middle, shift: false }, Pan),
        (Gesture::Drag { button: Primary, shift: true }, VerticalPan),
        (Gesture::DoubleClick, Reset),
      ],
    }
  }
}

impl GestureBindings {
  pub fn new(bindings: Vec<(Gesture, CameraAction)>) -> Self {
    Self { bindings }
  }

  /// Exact match first; a shifted drag with no binding of its own falls
  /// back to the unshifted one.
  pub fn action_for(&self, gesture: Gesture) -> Option<CameraAction> {
    let lookup = |g: Gesture| {
      self
        .bindings
        .iter()
        .find(|(bound, _)| *bound == g)
        .map(|&(_, action)| action)
    };
    match gesture {
      Gesture::Drag { button, shift: true } => {
        lookup(gesture).or_else(|| lookup(Gesture::Drag { button, shift: false }))
      }
      _ => lookup(gesture),
    }
  }

  /// Camera command for a gesture. `dx`/`dy` are pixel deltas since the
  /// last event (for scroll, `dy` is the wheel delta).
  pub fn command(
    &self,
    gesture: Gesture,
    dx: f64,
    dy: f64,
    camera: &Camera,
    viewport_height: f64,
  ) -> Option<CameraCommand> {
    let wpp = camera.world_per_pixel(viewport_height);
    let command = match self.action_for(gesture)? {
      CameraAction::Rotate => CameraCommand::Orbit {
        azimuth: -dx * ORBIT_SENSITIVITY,
        elevation: dy * ORBIT_SENSITIVITY,
      },
      CameraAction::Pan => CameraCommand::Pan {
        right: -dx * wpp,
        up: dy * wpp,
      },
      CameraAction::VerticalPan => CameraCommand::PanVertical { dz: dy * wpp },
      CameraAction::Zoom => {
        if dy == 0.0 {
          return None;
        }
        CameraCommand::Zoom {
          factor: if dy > 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP },
        }
      }
      CameraAction::Reset => CameraCommand::Reset,
    };
    Some(command)
  }

  /// "<b>Zoom</b>: Scroll mouse wheel, <b>Rotate</b>: Left-click and drag, ..."
  pub fn instructions_markup(&self) -> String {
    self
      .bindings
      .iter()
      .map(|&(gesture, action)| format!("<b>{}</b>: {}", action.label(), describe(gesture)))
      .collect::<Vec<_>>()
      .join(", ")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn drag(button: MouseButton, shift: bool) -> Gesture {
    Gesture::Drag { button, shift }
  }

  #[test]
  fn default_table() {
    let b = GestureBindings::default();
    assert_eq!(b.action_for(drag(MouseButton::Primary, false)), Some(CameraAction::Rotate));
    assert_eq!(b.action_for(drag(MouseButton::Primary, true)), Some(CameraAction::VerticalPan));
    assert_eq!(b.action_for(drag(MouseButton::Secondary, false)), Some(CameraAction::Pan));
    assert_eq!(b.action_for(Gesture::Scroll), Some(CameraAction::Zoom));
    assert_eq!(b.action_for(Gesture::DoubleClick), Some(CameraAction::Reset));
  }

  #[test]
  fn shifted_drag_falls_back_to_plain_binding() {
    let b = GestureBindings::default();
    assert_eq!(b.action_for(drag(MouseButton::Secondary, true)), Some(CameraAction::Pan));

    let empty = GestureBindings::new(vec![]);
    assert_eq!(empty.action_for(Gesture::Scroll), None);
  }

  #[test]
  fn vertical_pan_follows_pixel_size() {
    let b = GestureBindings::default();
    let cam = Camera::new(10.0);
    let cmd = b
      .command(drag(MouseButton::Primary, true), 0.0, 20.0, &cam, 400.0)
      .unwrap();
    match cmd {
      CameraCommand::PanVertical { dz } => {
        assert!((dz - 20.0 * cam.world_per_pixel(400.0)).abs() < 1e-12)
      }
      other => panic!("unexpected command {other:?}"),
    }
  }

  #[test]
  fn rotate_uses_sensitivity() {
    let b = GestureBindings::default();
    let cam = Camera::new(10.0);
    let cmd = b.command(drag(MouseButton::Primary, false), 10.0, -4.0, &cam, 400.0);
    assert_eq!(
      cmd,
      Some(CameraCommand::Orbit {
        azimuth: -5.0,
        elevation: -2.0
      })
    );
  }

  #[test]
  fn scroll_direction_sets_zoom() {
    let b = GestureBindings::default();
    let cam = Camera::new(10.0);
    assert_eq!(
      b.command(Gesture::Scroll, 0.0, 1.0, &cam, 100.0),
      Some(CameraCommand::Zoom { factor: ZOOM_STEP })
    );
    assert_eq!(
      b.command(Gesture::Scroll, 0.0, -1.0, &cam, 100.0),
      Some(CameraCommand::Zoom { factor: 1.0 / ZOOM_STEP })
    );
    assert_eq!(b.command(Gesture::Scroll, 0.0, 0.0, &cam, 100.0), None);
  }

  #[test]
  fn instructions_list_every_binding() {
    let text = GestureBindings::default().instructions_markup();
    assert!(text.starts_with("<b>Zoom</b>: Scroll mouse wheel"));
    assert!(text.contains("<b>Vertical Pan</b>: Shift + Left-click and drag"));
    assert!(text.contains("<b>Rotate</b>"));
  }

  #[test]
  fn button_numbers() {
    assert_eq!(MouseButton::from_index(1), Some(MouseButton::Primary));
    assert_eq!(MouseButton::from_index(3), Some(MouseButton::Secondary));
    assert_eq!(MouseButton::from_index(8), None);
  }
}
