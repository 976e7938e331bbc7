// src/state.rs
use crate::config::{Config, ViewSettings};
use crate::ui::controller::{render_page, PageView, Selection};

pub struct AppState {
  pub config: Config,
  pub selection: Selection,
  /// Figures for `selection`; rebuilt on every selection change.
  pub page: PageView,
  pub view: ViewSettings,
}

impl AppState {
  pub fn new() -> Self {
    Self::with_config(Config::default())
  }

  pub fn with_config(config: Config) -> Self {
    let selection = Selection::new(config.default_system);
    Self {
      page: render_page(&selection),
      selection,
      view: config.view,
      config,
    }
  }

  /// Replaces the config with the on-disk one. Returns the load message.
  pub fn load_config(&mut self) -> String {
    let (config, msg) = Config::load();
    *self = Self::with_config(config);
    msg
  }

  /// Returns false when nothing changed.
  pub fn apply_selection(&mut self, selection: Selection) -> bool {
    if selection == self.selection {
      return false;
    }
    self.page = render_page(&selection);
    self.selection = selection;
    true
  }

  pub fn reset_view(&mut self) {
    self.view = self.config.view;
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::CrystalSystem;

  #[test]
  fn test_state_follows_config() {
    let config = Config {
      default_system: CrystalSystem::Fcc,
      ..Config::default()
    };
    let mut st = AppState::with_config(config);
    assert_eq!(st.selection.slip_plane, "(111)");
    assert_eq!(st.page.subheader, "FCC Structure");

    st.view = st.view.rotated(1.0, 0.2).zoomed(2.0);
    assert_ne!(st.view, st.config.view);
    st.reset_view();
    assert_eq!(st.view, st.config.view);
  }

  #[test]
  fn test_apply_selection_rebuilds_page() {
    let mut st = AppState::new();
    let same = st.selection.clone();
    assert!(!st.apply_selection(same));

    let sel = st.selection.with_system(CrystalSystem::Fcc);
    assert!(st.apply_selection(sel));
    assert_eq!(st.page.structure.title, "FCC Crystal System");
    assert_eq!(st.page.plane.as_ref().unwrap().title, "FCC Slip Plane (111)");

    let sel = st.selection.with_slip_plane("(999)");
    assert!(st.apply_selection(sel));
    assert!(st.page.plane.is_err());
  }
}
