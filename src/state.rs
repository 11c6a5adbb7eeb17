// src/state.rs

use crate::config::Config;
use crate::error::LoadError;
use crate::io;
use crate::model::{ElementTable, Structure};
use crate::rendering::{build_scene, Viewport};
use std::path::Path;

pub const LOAD_OK: &str = "Loaded POSCAR file successfully.";

/// Everything the viewer keeps between loads. The table is read-only; the
/// structure is replaced wholesale on every successful load.
pub struct AppState {
  pub table: ElementTable,
  pub config: Config,
  pub structure: Option<Structure>,
  pub file_name: String,
}

impl AppState {
  pub fn new(table: ElementTable, config: Config) -> Self {
    Self {
      table,
      config,
      structure: None,
      file_name: String::new(),
    }
  }

  /// Parse, build and hand the scene to `viewport`. On error neither the
  /// viewport nor the current structure is touched.
  pub fn load_file<V: Viewport + ?Sized>(
    &mut self,
    path: &Path,
    viewport: &mut V,
  ) -> Result<&Structure, LoadError> {
    let structure = io::load_structure(path, &self.table)?;
    let scene = build_scene(&structure, &self.table, &self.config.scene_options())?;
    scene.present(viewport);

    log::info!(
      "Loaded {:?}: {} ({} atoms)",
      path,
      structure.formula(),
      structure.positions.len()
    );
    self.file_name = path
      .file_name()
      .map(|n| n.to_string_lossy().to_string())
      .unwrap_or_default();
    Ok(self.structure.insert(structure))
  }

  /// Status line for the outcome of [`load_file`](Self::load_file).
  pub fn status_message<T>(result: &Result<T, LoadError>) -> String {
    match result {
      Ok(_) => LOAD_OK.to_string(),
      Err(e) => format!("Error loading POSCAR file: {}", e),
    }
  }
}
