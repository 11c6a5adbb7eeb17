// src/config.rs

use crate::rendering::SceneOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

fn default_element_table() -> PathBuf {
  PathBuf::from("atomic_data.json")
}

fn default_fallback_radius() -> Option<f64> {
  SceneOptions::default().fallback_radius
}

fn is_valid_radius(r: f64) -> bool {
  r.is_finite() && r > 0.0
}

fn default_distance() -> f64 {
  40.0
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// Element property table written by `generate_periodic_table`.
  #[serde(default = "default_element_table")]
  pub element_table: PathBuf,

  /// Sphere radius for elements without a van der Waals radius;
  /// `null` makes such files fail to load instead.
  #[serde(default = "default_fallback_radius")]
  pub fallback_radius: Option<f64>,

  #[serde(default = "default_distance")]
  pub initial_distance: f64,

  #[serde(default)]
  pub background_color: (f64, f64, f64),
}

impl Default for Config {
  fn default() -> Self {
    Self {
      element_table: default_element_table(),
      fallback_radius: default_fallback_radius(),
      initial_distance: default_distance(),
      background_color: (0.0, 0.0, 0.0),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/poscar3d/settings.json)
  pub fn load() -> (Self, String) {
    match Self::get_path() {
      Some(path) => Self::load_from(&path),
      None => (Self::default(), "No config directory. Using defaults.".to_string()),
    }
  }

  /// Never fails: problems fall back to defaults and are described in the message.
  pub fn load_from(path: &Path) -> (Self, String) {
    if !path.exists() {
      return (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      );
    }
    match File::open(path) {
      Ok(file) => match serde_json::from_reader::<_, Config>(BufReader::new(file)) {
        Ok(mut cfg) => match cfg.fallback_radius {
          Some(r) if !is_valid_radius(r) => {
            cfg.fallback_radius = default_fallback_radius();
            (
              cfg,
              format!("Config loaded from {:?}; ignoring fallback_radius {} (must be positive)", path, r),
            )
          }
          _ => (cfg, format!("Config loaded from {:?}", path)),
        },
        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
      },
      Err(e) => (Self::default(), format!("Error opening config: {}", e)),
    }
  }

  /// A non-positive or non-finite radius is replaced by the default.
  pub fn scene_options(&self) -> SceneOptions {
    let fallback_radius = match self.fallback_radius {
      Some(r) if !is_valid_radius(r) => default_fallback_radius(),
      other => other,
    };
    SceneOptions { fallback_radius }
  }

  fn get_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "poscar3d", "poscar3d").map(|proj| proj.config_dir().join("settings.json"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, msg) = Config::load_from(&dir.path().join("settings.json"));
    assert_eq!(cfg, Config::default());
    assert!(msg.contains("Using defaults"));
  }

  #[test]
  fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "fallback_radius": null, "initial_distance": 12.5 }"#).unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert!(msg.starts_with("Config loaded"));
    assert_eq!(cfg.fallback_radius, None);
    assert_eq!(cfg.initial_distance, 12.5);
    assert_eq!(cfg.element_table, PathBuf::from("atomic_data.json"));
    assert_eq!(cfg.scene_options().fallback_radius, None);
  }

  #[test]
  fn bad_fallback_radius_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    for bad in ["0", "-1.5"] {
      std::fs::write(&path, format!(r#"{{ "fallback_radius": {} }}"#, bad)).unwrap();
      let (cfg, msg) = Config::load_from(&path);
      assert_eq!(cfg.fallback_radius, Some(1.5), "{bad}");
      assert!(msg.contains("ignoring fallback_radius"), "{msg}");
    }

    let cfg = Config {
      fallback_radius: Some(f64::NAN),
      ..Config::default()
    };
    assert_eq!(cfg.scene_options().fallback_radius, Some(1.5));
  }

  #[test]
  fn broken_file_gives_defaults_and_says_why() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
  }
}
