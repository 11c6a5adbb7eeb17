// src/ui/controllers.rs
//
// GTK event controllers that feed the gesture table.

use crate::interactions::{Gesture, GestureBindings, MouseButton};
use crate::rendering::SceneViewport;
use gdk4::ModifierType;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerScroll, EventControllerScrollFlags, GestureClick, GestureDrag};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub fn setup_interactions(
  drawing_area: &DrawingArea,
  viewport: Rc<RefCell<SceneViewport>>,
  bindings: Rc<GestureBindings>,
) {
  // 1. DRAG (rotate / pan / vertical pan)
  let drag = GestureDrag::new();
  drag.set_button(0);

  let active: Rc<Cell<Option<Gesture>>> = Rc::new(Cell::new(None));
  let last_offset = Rc::new(Cell::new((0.0, 0.0)));

  let a = active.clone();
  let lo = last_offset.clone();
  drag.connect_drag_begin(move |gesture, _, _| {
    let button = MouseButton::from_index(gesture.current_button());
    let shift = gesture.current_event_state().contains(ModifierType::SHIFT_MASK);
    a.set(button.map(|button| Gesture::Drag { button, shift }));
    lo.set((0.0, 0.0));
  });

  let a = active.clone();
  let lo = last_offset.clone();
  let vp = viewport.clone();
  let b = bindings.clone();
  let da = drawing_area.clone();
  drag.connect_drag_update(move |_, off_x, off_y| {
    let Some(gesture) = a.get() else { return };
    let (last_x, last_y) = lo.replace((off_x, off_y));
    let (dx, dy) = (off_x - last_x, off_y - last_y);

    let mut view = vp.borrow_mut();
    if let Some(cmd) = b.command(gesture, dx, dy, &view.camera, da.height() as f64) {
      view.apply(cmd);
      da.queue_draw();
    }
  });

  let a = active.clone();
  drag.connect_drag_end(move |_, _, _| a.set(None));
  drawing_area.add_controller(drag);

  // 2. SCROLL (zoom)
  let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
  let vp = viewport.clone();
  let b = bindings.clone();
  let da = drawing_area.clone();
  scroll.connect_scroll(move |_, _, dy| {
    let mut view = vp.borrow_mut();
    if let Some(cmd) = b.command(Gesture::Scroll, 0.0, dy, &view.camera, da.height() as f64) {
      view.apply(cmd);
      da.queue_draw();
    }
    glib::Propagation::Stop
  });
  drawing_area.add_controller(scroll);

  // 3. DOUBLE CLICK (reset view)
  let click = GestureClick::new();
  click.set_button(0);
  let vp = viewport;
  let b = bindings;
  let da = drawing_area.clone();
  click.connect_pressed(move |_, n_press, _, _| {
    if n_press != 2 {
      return;
    }
    let mut view = vp.borrow_mut();
    if let Some(cmd) = b.command(Gesture::DoubleClick, 0.0, 0.0, &view.camera, da.height() as f64) {
      view.apply(cmd);
      da.queue_draw();
    }
  });
  drawing_area.add_controller(click);
}
