// src/config.rs

use crate::model::CrystalSystem;
use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExportFormat {
  Png,
  Pdf,
  Svg,
}

impl ExportFormat {
  pub fn extension(&self) -> &'static str {
    match self {
      ExportFormat::Png => "png",
      ExportFormat::Pdf => "pdf",
      ExportFormat::Svg => "svg",
    }
  }
}

// --- View ---

/// Orientation of the 3D projection, shared by both plots.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
  /// Radians
  pub pitch: f64,
  /// Radians
  pub yaw: f64,
  pub scale: f64,
}

impl Default for ViewSettings {
  fn default() -> Self {
    Self {
      pitch: 0.45,
      yaw: 0.75,
      scale: 0.9,
    }
  }
}

impl ViewSettings {
  pub const MIN_SCALE: f64 = 0.2;
  pub const MAX_SCALE: f64 = 3.0;

  pub fn rotated(&self, d_yaw: f64, d_pitch: f64) -> Self {
    Self {
      pitch: (self.pitch + d_pitch).clamp(-1.5, 1.5),
      yaw: self.yaw + d_yaw,
      scale: self.scale,
    }
  }

  pub fn zoomed(&self, factor: f64) -> Self {
    Self {
      scale: (self.scale * factor).clamp(Self::MIN_SCALE, Self::MAX_SCALE),
      ..*self
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub default_system: CrystalSystem,
  pub view: ViewSettings,
  /// Pixel size of exported figures
  pub figure_size: (u32, u32),
  pub export_format: ExportFormat,
  pub show_console: bool,
  /// One of off/error/warn/info/debug/trace
  pub log_level: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_system: CrystalSystem::Bcc,
      view: ViewSettings::default(),
      figure_size: (800, 600),
      export_format: ExportFormat::Png,
      show_console: true,
      log_level: "info".to_string(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/slipview/settings.json).
  /// Never fails: the message says where the values came from.
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if !path.exists() {
      return (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      );
    }

    match File::open(path) {
      Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
      },
      Err(e) => (Self::default(), format!("Error opening config: {}", e)),
    }
  }

  pub fn level_filter(&self) -> LevelFilter {
    self.log_level.parse().unwrap_or(LevelFilter::Info)
  }

  fn get_path() -> PathBuf {
    // Must match the application id in main.rs
    if let Some(proj) = ProjectDirs::from("org", "example", "slipview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn test_empty_json_gives_defaults() {
    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, Config::default());
  }

  #[test]
  fn test_partial_config() {
    let cfg: Config =
      serde_json::from_str(r#"{ "default_system": "FCC", "view": { "yaw": 1.0 } }"#).unwrap();
    assert_eq!(cfg.default_system, CrystalSystem::Fcc);
    assert_eq!(cfg.view.yaw, 1.0);
    assert_eq!(cfg.view.pitch, ViewSettings::default().pitch);
    assert_eq!(cfg.export_format, ExportFormat::Png);
  }

  #[test]
  fn test_log_level() {
    let mut cfg = Config::default();
    assert_eq!(cfg.level_filter(), LevelFilter::Info);
    cfg.log_level = "debug".to_string();
    assert_eq!(cfg.level_filter(), LevelFilter::Debug);
    cfg.log_level = "loud".to_string();
    assert_eq!(cfg.level_filter(), LevelFilter::Info);
  }

  #[test]
  fn test_load_missing_and_malformed() {
    let dir = std::env::temp_dir().join("slipview_config_test");
    let _ = fs::create_dir_all(&dir);

    let (cfg, msg) = Config::load_from(&dir.join("does_not_exist.json"));
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("No config found"));

    let bad = dir.join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let (cfg, msg) = Config::load_from(&bad);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));

    let good = dir.join("good.json");
    fs::write(&good, r#"{ "export_format": "Svg", "figure_size": [640, 480] }"#).unwrap();
    let (cfg, msg) = Config::load_from(&good);
    assert_eq!(cfg.export_format, ExportFormat::Svg);
    assert_eq!(cfg.figure_size, (640, 480));
    assert!(msg.starts_with("Config loaded"));
  }

  #[test]
  fn test_view_clamps() {
    let v = ViewSettings::default();
    assert_eq!(v.zoomed(100.0).scale, ViewSettings::MAX_SCALE);
    assert_eq!(v.zoomed(0.0).scale, ViewSettings::MIN_SCALE);
    assert_eq!(v.rotated(0.0, 10.0).pitch, 1.5);
    assert!((v.rotated(0.25, 0.0).yaw - (v.yaw + 0.25)).abs() < 1e-12);
  }
}
