// src/model/slip.rs

use super::structure::{CrystalSystem, Point};
use std::fmt;

/// One slip plane polygon, keyed by its Miller label.
#[derive(Clone, Debug, PartialEq)]
pub struct SlipPlane {
  pub system: CrystalSystem,
  pub label: &'static str,
  pub points: &'static [Point],
}

impl SlipPlane {
  pub fn title(&self) -> String {
    format!("{} Slip Plane {}", self.system.name(), self.label)
  }
}

// --- Tables ---
// Order of each table is the order shown in the selector.

static BCC_PLANES: [(&str, &[Point]); 3] = [
  (
    "(110)",
    &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
  ),
  (
    "(112)",
    &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.5, 0.5, 1.0]],
  ),
  (
    "(123)",
    &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.5], [0.33, 0.67, 1.0]],
  ),
];

static FCC_PLANES: [(&str, &[Point]); 4] = [
  ("(111)", &[[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]),
  ("(-111)", &[[0.0, 0.0, -1.0], [0.0, -1.0, 0.0], [-1.0, 0.0, 0.0]]),
  ("(1-11)", &[[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]),
  ("(-1-11)", &[[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]),
];

fn table(system: CrystalSystem) -> &'static [(&'static str, &'static [Point])] {
  match system {
    CrystalSystem::Bcc => &BCC_PLANES,
    CrystalSystem::Fcc => &FCC_PLANES,
  }
}

// --- Error Handling ---

#[derive(Debug, Clone, PartialEq)]
pub enum SlipPlaneError {
  /// Label is not in the fixed mapping of the given system.
  InvalidLabel { system: CrystalSystem, label: String },
}

impl fmt::Display for SlipPlaneError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      SlipPlaneError::InvalidLabel { system, .. } => {
        write!(f, "Invalid {} slip plane.", system.name())
      }
    }
  }
}

impl std::error::Error for SlipPlaneError {}

// --- Dispatch ---

/// Labels offered by the "Select Slip Plane" selector for `system`.
pub fn slip_plane_labels(system: CrystalSystem) -> Vec<&'static str> {
  table(system).iter().map(|(label, _)| *label).collect()
}

/// Exact-match lookup of a slip plane label.
pub fn lookup_slip_plane(system: CrystalSystem, label: &str) -> Result<SlipPlane, SlipPlaneError> {
  table(system)
    .iter()
    .find(|(l, _)| *l == label)
    .map(|(l, points)| SlipPlane {
      system,
      label: *l,
      points: *points,
    })
    .ok_or_else(|| SlipPlaneError::InvalidLabel {
      system,
      label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_labels_per_system() {
    assert_eq!(
      slip_plane_labels(CrystalSystem::Bcc),
      vec!["(110)", "(112)", "(123)"]
    );
    assert_eq!(
      slip_plane_labels(CrystalSystem::Fcc),
      vec!["(111)", "(-111)", "(1-11)", "(-1-11)"]
    );
  }

  #[test]
  fn test_every_plane_has_three_or_four_points() {
    for system in CrystalSystem::ALL {
      for label in slip_plane_labels(system) {
        let plane = lookup_slip_plane(system, label).unwrap();
        assert!(
          (3..=4).contains(&plane.points.len()),
          "{} {} has {} points",
          system,
          label,
          plane.points.len()
        );
      }
    }
  }

  #[test]
  fn test_fcc_111() {
    let plane = lookup_slip_plane(CrystalSystem::Fcc, "(111)").unwrap();
    assert_eq!(
      plane.points,
      &[[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]
    );
    assert_eq!(plane.title(), "FCC Slip Plane (111)");
  }

  #[test]
  fn test_bcc_123_keeps_rounded_coordinates() {
    let plane = lookup_slip_plane(CrystalSystem::Bcc, "(123)").unwrap();
    assert_eq!(plane.points[3], [0.33, 0.67, 1.0]);
  }

  #[test]
  fn test_invalid_label_messages() {
    let err = lookup_slip_plane(CrystalSystem::Bcc, "(999)").unwrap_err();
    assert_eq!(err.to_string(), "Invalid BCC slip plane.");

    let err = lookup_slip_plane(CrystalSystem::Fcc, "(999)").unwrap_err();
    assert_eq!(err.to_string(), "Invalid FCC slip plane.");
  }

  #[test]
  fn test_labels_do_not_cross_systems() {
    // (110) is a BCC plane only
    assert!(lookup_slip_plane(CrystalSystem::Fcc, "(110)").is_err());
    assert!(lookup_slip_plane(CrystalSystem::Bcc, "(111)").is_err());
  }

  #[test]
  fn test_lookup_is_exact_match() {
    assert!(lookup_slip_plane(CrystalSystem::Bcc, "110").is_err());
    assert!(lookup_slip_plane(CrystalSystem::Bcc, " (110)").is_err());
    assert!(lookup_slip_plane(CrystalSystem::Bcc, "").is_err());
  }

  #[test]
  fn test_lookup_is_idempotent() {
    let a = lookup_slip_plane(CrystalSystem::Fcc, "(-1-11)");
    let b = lookup_slip_plane(CrystalSystem::Fcc, "(-1-11)");
    assert_eq!(a, b);
  }
}
