// src/menu/actions_file.rs

use crate::rendering::{export_all, Figure};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, FileChooserAction, FileChooserNative, ResponseType};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Writes the figures currently on screen into `dir`.
fn export_current(state: &AppState, dir: &Path) -> Result<usize, String> {
  let mut figures: Vec<&Figure> = vec![&state.page.structure];
  if let Ok(plane) = &state.page.plane {
    figures.push(plane);
  }

  let written = export_all(
    &figures,
    &state.view,
    dir,
    state.config.export_format,
    state.config.figure_size,
  )?;
  Ok(written.len())
}

pub fn setup(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
) {
  // --- EXPORT ACTION ---
  let export_action = gtk4::gio::SimpleAction::new("export", None);
  let win_weak = window.downgrade();
  let state_weak = Rc::downgrade(&state);

  export_action.connect_activate(move |_, _| {
    let Some(win) = win_weak.upgrade() else {
      return;
    };

    let dialog = FileChooserNative::new(
      Some("Export Figures To Folder"),
      Some(&win),
      FileChooserAction::SelectFolder,
      Some("Export"),
      Some("Cancel"),
    );

    let state_weak_inner = state_weak.clone();
    dialog.connect_response(move |d, response| {
      if response == ResponseType::Accept {
        let dir = d.file().and_then(|f| f.path());
        if let (Some(dir), Some(st)) = (dir, state_weak_inner.upgrade()) {
          match export_current(&st.borrow(), &dir) {
            Ok(n) => log::info!("Exported {} figure(s) to {:?}", n, dir),
            Err(e) => log::error!("Export failed: {}", e),
          }
        }
      }
      d.destroy();
    });

    dialog.show();
  });
  app.add_action(&export_action);

  // --- QUIT ACTION ---
  let quit_action = gtk4::gio::SimpleAction::new("quit", None);
  let win_weak = window.downgrade();
  quit_action.connect_activate(move |_, _| {
    if let Some(win) = win_weak.upgrade() {
      win.close();
    }
  });
  app.add_action(&quit_action);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{Config, ExportFormat};
  use crate::model::CrystalSystem;

  #[test]
  fn test_export_current_skips_invalid_plane() {
    let dir = std::env::temp_dir().join("slipview_export_current");
    let _ = std::fs::create_dir_all(&dir);

    let config = Config {
      default_system: CrystalSystem::Fcc,
      export_format: ExportFormat::Svg,
      figure_size: (320, 240),
      ..Config::default()
    };
    let mut st = AppState::with_config(config);
    assert_eq!(export_current(&st, &dir), Ok(2));

    let sel = st.selection.with_slip_plane("(999)");
    st.apply_selection(sel);
    assert_eq!(export_current(&st, &dir), Ok(1));
  }
}
