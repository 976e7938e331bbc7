// src/model/structure.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in unit-cell-normalized space.
pub type Point = [f64; 3];

/// Planar quadrilateral used only for drawing cell faces.
pub type Face = [Point; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrystalSystem {
  #[serde(rename = "BCC")]
  Bcc,
  #[serde(rename = "FCC")]
  Fcc,
}

impl CrystalSystem {
  /// Order matches the "Choose the Crystal System" selector.
  pub const ALL: [CrystalSystem; 2] = [CrystalSystem::Bcc, CrystalSystem::Fcc];

  pub fn name(&self) -> &'static str {
    match self {
      CrystalSystem::Bcc => "BCC",
      CrystalSystem::Fcc => "FCC",
    }
  }

  pub fn index(&self) -> usize {
    match self {
      CrystalSystem::Bcc => 0,
      CrystalSystem::Fcc => 1,
    }
  }

  pub fn from_index(index: usize) -> Option<Self> {
    Self::ALL.get(index).copied()
  }
}

impl fmt::Display for CrystalSystem {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

// --- Static Tables ---

/// The 8 vertices of the unit cube, shared by both cubic cells.
pub const CORNERS: [Point; 8] = [
  [0.0, 0.0, 0.0],
  [1.0, 0.0, 0.0],
  [0.0, 1.0, 0.0],
  [0.0, 0.0, 1.0],
  [1.0, 1.0, 0.0],
  [1.0, 0.0, 1.0],
  [0.0, 1.0, 1.0],
  [1.0, 1.0, 1.0],
];

/// Cube faces as index quads into `CORNERS`.
pub const FACE_INDICES: [[usize; 4]; 6] = [
  [0, 1, 4, 2],
  [0, 1, 5, 3],
  [0, 2, 6, 3],
  [7, 6, 2, 4],
  [7, 6, 3, 5],
  [7, 4, 1, 5],
];

pub const FCC_FACE_CENTERS: [Point; 6] = [
  [0.5, 0.5, 0.0],
  [0.5, 0.0, 0.5],
  [0.0, 0.5, 0.5],
  [0.5, 0.5, 1.0],
  [0.5, 1.0, 0.5],
  [1.0, 0.5, 0.5],
];

/// A unit cell ready to hand to the structure renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Structure {
  pub system: CrystalSystem,
  pub corners: &'static [Point],
  pub face_centers: Option<&'static [Point]>,
  pub face_indices: &'static [[usize; 4]],
}

impl Structure {
  pub fn title(&self) -> String {
    format!("{} Crystal System", self.system.name())
  }

  /// Faces resolved against this structure's own corner list.
  pub fn faces(&self) -> Vec<Face> {
    self
      .face_indices
      .iter()
      .map(|&quad| quad.map(|i| self.corners[i]))
      .collect()
  }

  /// Every atom position drawn as a marker: corners first, then face centers.
  pub fn all_points(&self) -> Vec<Point> {
    let mut points = self.corners.to_vec();
    if let Some(centers) = self.face_centers {
      points.extend_from_slice(centers);
    }
    points
  }
}

/// Static lookup of a cubic cell. No state, no failure mode.
pub fn structure_for(system: CrystalSystem) -> Structure {
  match system {
    CrystalSystem::Bcc => Structure {
      system,
      corners: &CORNERS,
      face_centers: None,
      face_indices: &FACE_INDICES,
    },
    CrystalSystem::Fcc => Structure {
      system,
      corners: &CORNERS,
      face_centers: Some(&FCC_FACE_CENTERS),
      face_indices: &FACE_INDICES,
    },
  }
}
