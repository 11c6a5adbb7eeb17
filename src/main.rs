use gtk4::prelude::*;
use gtk4::{glib, Application};
use log::LevelFilter;
use std::cell::RefCell;
use std::rc::Rc;

use poscar3d::config::Config;
use poscar3d::io;
use poscar3d::state::AppState;
use poscar3d::ui;
use poscar3d::utils::logger;

fn main() -> glib::ExitCode {
  if let Err(e) = logger::init(LevelFilter::Info) {
    eprintln!("Logger already installed: {}", e);
  }

  let (config, msg) = Config::load();
  log::info!("{}", msg);

  // Without the element table no file can be rendered, so refuse to start.
  let table = match io::elements::load(&config.element_table) {
    Ok(t) => t,
    Err(e) => {
      log::error!("{}", e);
      log::error!("Run `generate_periodic_table` to create it.");
      return glib::ExitCode::FAILURE;
    }
  };

  let state = Rc::new(RefCell::new(AppState::new(table, config)));

  let app = Application::builder()
    .application_id("org.poscar3d.viewer")
    .build();

  app.connect_activate(move |app| ui::build_ui(app, state.clone()));
  app.run()
}
