// src/ui/controller.rs
//
// Selection -> table lookup -> figure. Everything here takes the current
// selection as arguments; no widget is read.

use crate::model::{
  lookup_slip_plane, slip_plane_labels, structure_for, CrystalSystem, SlipPlaneError,
};
use crate::rendering::figure::{cell_figure, plane_figure, Figure};

pub const PAGE_TITLE: &str = "Crystal Plasticity Visualizer 🧊";
pub const SYSTEM_PROMPT: &str = "Choose the Crystal System";

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
  pub system: CrystalSystem,
  pub slip_plane: String,
}

impl Selection {
  /// Fresh selection: the first slip plane of `system`.
  pub fn new(system: CrystalSystem) -> Self {
    let slip_plane = slip_plane_labels(system)
      .first()
      .map(|l| l.to_string())
      .unwrap_or_default();
    Self { system, slip_plane }
  }

  /// Switching systems rebuilds the dependent selector, so its value resets.
  pub fn with_system(&self, system: CrystalSystem) -> Self {
    if system == self.system {
      self.clone()
    } else {
      Self::new(system)
    }
  }

  pub fn with_slip_plane(&self, label: &str) -> Self {
    Self {
      system: self.system,
      slip_plane: label.to_string(),
    }
  }
}

/// Everything the page shows for one selection.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
  pub subheader: String,
  pub structure: Figure,
  pub slip_plane_prompt: String,
  pub slip_plane_options: Vec<&'static str>,
  pub plane: Result<Figure, SlipPlaneError>,
}

pub fn slip_plane_prompt(system: CrystalSystem) -> String {
  format!("Select {} Slip Plane", system.name())
}

/// Cell plot of `system`.
pub fn display_structure(system: CrystalSystem) -> Figure {
  cell_figure(&structure_for(system))
}

/// Plane plot of `label`, or the user-facing error when `system` has no such plane.
pub fn display_slip_plane(system: CrystalSystem, label: &str) -> Result<Figure, SlipPlaneError> {
  match lookup_slip_plane(system, label) {
    Ok(plane) => Ok(plane_figure(plane.points, &plane.title())),
    Err(e) => {
      log::warn!("{} (label {:?})", e, label);
      Err(e)
    }
  }
}

pub fn render_page(selection: &Selection) -> PageView {
  let system = selection.system;
  PageView {
    subheader: format!("{} Structure", system.name()),
    structure: display_structure(system),
    slip_plane_prompt: slip_plane_prompt(system),
    slip_plane_options: slip_plane_labels(system),
    plane: display_slip_plane(system, &selection.slip_plane),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bcc_page() {
    let page = render_page(&Selection::new(CrystalSystem::Bcc));

    assert_eq!(page.subheader, "BCC Structure");
    assert_eq!(page.structure.title, "BCC Crystal System");
    assert_eq!(page.slip_plane_prompt, "Select BCC Slip Plane");
    assert_eq!(page.slip_plane_options, vec!["(110)", "(112)", "(123)"]);
    assert_eq!(page.plane.unwrap().title, "BCC Slip Plane (110)");
  }

  #[test]
  fn test_fcc_111_page() {
    let sel = Selection::new(CrystalSystem::Fcc).with_slip_plane("(111)");
    let page = render_page(&sel);

    let plane = page.plane.unwrap();
    assert_eq!(plane.title, "FCC Slip Plane (111)");
    assert_eq!(
      plane.polygons[0].vertices,
      vec![[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]
    );
  }

  #[test]
  fn test_invalid_plane_gives_message_and_no_figure() {
    let err = display_slip_plane(CrystalSystem::Bcc, "(999)").unwrap_err();
    assert_eq!(err.to_string(), "Invalid BCC slip plane.");

    let page = render_page(&Selection::new(CrystalSystem::Fcc).with_slip_plane("(110)"));
    assert_eq!(page.plane.unwrap_err().to_string(), "Invalid FCC slip plane.");
    // The cell plot is unaffected
    assert_eq!(page.structure.title, "FCC Crystal System");
  }

  #[test]
  fn test_switching_system_resets_plane() {
    let sel = Selection::new(CrystalSystem::Bcc).with_slip_plane("(123)");
    assert_eq!(sel.with_system(CrystalSystem::Bcc).slip_plane, "(123)");

    let switched = sel.with_system(CrystalSystem::Fcc);
    assert_eq!(switched.system, CrystalSystem::Fcc);
    assert_eq!(switched.slip_plane, "(111)");
  }

  #[test]
  fn test_render_is_idempotent() {
    let sel = Selection::new(CrystalSystem::Fcc).with_slip_plane("(1-11)");
    assert_eq!(render_page(&sel), render_page(&sel));
  }
}
