// src/utils/report.rs

use crate::model::{Point, SlipPlane, Structure};

fn coordinate_table(out: &mut String, rows: &[(String, Point)]) {
  out.push_str("--------------------------------------------\n");
  out.push_str(&format!(
    "{:<8} {:<10} {:<8} {:<8} {:<8}\n",
    "Index", "Site", "X", "Y", "Z"
  ));
  out.push_str("--------------------------------------------\n");
  for (i, (site, p)) in rows.iter().enumerate() {
    out.push_str(&format!(
      "{:<8} {:<10} {:<8.2} {:<8.2} {:<8.2}\n",
      i, site, p[0], p[1], p[2]
    ));
  }
}

/// Console text for the displayed unit cell.
pub fn structure_summary(structure: &Structure) -> String {
  let mut rows: Vec<(String, Point)> = structure
    .corners
    .iter()
    .map(|p| ("corner".to_string(), *p))
    .collect();
  if let Some(centers) = structure.face_centers {
    rows.extend(centers.iter().map(|p| ("face".to_string(), *p)));
  }

  let mut out = String::new();
  out.push_str(&format!("{}\n", structure.title()));
  out.push_str(&format!(
    "Atoms: {}   Faces: {}\n",
    rows.len(),
    structure.face_indices.len()
  ));
  coordinate_table(&mut out, &rows);
  out
}

/// Console text for the displayed slip plane polygon.
pub fn plane_summary(plane: &SlipPlane) -> String {
  let rows: Vec<(String, Point)> = plane
    .points
    .iter()
    .map(|p| ("vertex".to_string(), *p))
    .collect();

  let mut out = String::new();
  out.push_str(&format!("{}\n", plane.title()));
  out.push_str(&format!("Vertices: {}\n", rows.len()));
  coordinate_table(&mut out, &rows);
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{lookup_slip_plane, structure_for, CrystalSystem};

  #[test]
  fn test_fcc_summary_lists_all_sites() {
    let text = structure_summary(&structure_for(CrystalSystem::Fcc));
    assert!(text.starts_with("FCC Crystal System\n"));
    assert!(text.contains("Atoms: 14   Faces: 6"));
    assert_eq!(text.matches("corner").count(), 8);
    assert_eq!(text.matches("face ").count(), 6);
  }

  #[test]
  fn test_plane_summary() {
    let plane = lookup_slip_plane(CrystalSystem::Bcc, "(123)").unwrap();
    let text = plane_summary(&plane);
    assert!(text.starts_with("BCC Slip Plane (123)\n"));
    assert!(text.contains("Vertices: 4"));
    assert!(text.contains("0.33"));
    assert!(text.contains("0.67"));
  }
}
