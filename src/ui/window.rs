// src/ui/window.rs

use super::controllers::setup_interactions;
use crate::interactions::GestureBindings;
use crate::rendering::{painter, SceneViewport};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{
  Align, Application, ApplicationWindow, Box as GtkBox, Button, DrawingArea, FileChooserAction,
  FileChooserNative, Label, Orientation, ResponseType,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn build_ui(app: &Application, state: Rc<RefCell<AppState>>) {
  let (initial_distance, background) = {
    let st = state.borrow();
    (st.config.initial_distance, st.config.background_color)
  };
  let viewport = Rc::new(RefCell::new(SceneViewport::new(initial_distance)));
  let bindings = Rc::new(GestureBindings::default());

  let window = ApplicationWindow::builder()
    .application(app)
    .title("POSCAR3D Viewer")
    .default_width(800)
    .default_height(900)
    .build();

  let root_vbox = GtkBox::new(Orientation::Vertical, 4);
  window.set_child(Some(&root_vbox));

  let drawing_area = DrawingArea::new();
  drawing_area.set_vexpand(true);
  drawing_area.set_hexpand(true);

  let instructions = Label::new(None);
  instructions.set_markup(&bindings.instructions_markup());
  instructions.set_wrap(false);
  instructions.set_halign(Align::Start);

  let load_button = Button::with_label("Load POSCAR");

  let status = Label::new(Some("Ready."));
  status.set_halign(Align::Start);
  status.set_margin_start(6);
  status.set_margin_bottom(4);

  root_vbox.append(&drawing_area);
  root_vbox.append(&instructions);
  root_vbox.append(&load_button);
  root_vbox.append(&status);

  setup_interactions(&drawing_area, viewport.clone(), bindings);

  // Drawing Function
  let vp = viewport.clone();
  drawing_area.set_draw_func(move |_, cr, w, h| {
    let view = vp.borrow();
    if let Err(e) = painter::draw(cr, &view, background, w as f64, h as f64) {
      log::error!("Render failed: {}", e);
    }
  });

  // --- OPEN ACTION ---
  let win_weak = window.downgrade();
  let da_weak = drawing_area.downgrade();
  let status_weak = status.downgrade();
  load_button.connect_clicked(move |_| {
    let win = match win_weak.upgrade() {
      Some(w) => w,
      None => return,
    };

    let dialog = FileChooserNative::new(
      Some("Open POSCAR File"),
      Some(&win),
      FileChooserAction::Open,
      Some("Open"),
      Some("Cancel"),
    );

    let state = state.clone();
    let viewport = viewport.clone();
    let da_weak = da_weak.clone();
    let status_weak = status_weak.clone();
    dialog.connect_response(move |d, response| {
      if response == ResponseType::Accept {
        if let Some(path) = d.file().and_then(|f| f.path()) {
          let message = {
            let mut st = state.borrow_mut();
            let mut view = viewport.borrow_mut();
            let result = st.load_file(&path, &mut *view).map(|_| ());
            if let Err(e) = &result {
              log::error!("{}", e);
            }
            AppState::status_message(&result)
          };

          if let Some(label) = status_weak.upgrade() {
            label.set_text(&message);
          }
          if let Some(da) = da_weak.upgrade() {
            da.queue_draw();
          }
        }
      }
      d.destroy();
    });
    dialog.show();
  });

  window.present();
}
