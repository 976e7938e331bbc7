// src/rendering/figure.rs
//
// Backend-neutral description of one 3D plot. Building a `Figure` never
// touches a drawing surface; `chart::draw_figure` turns it into pixels.

use crate::model::{Face, Point, Structure};
use plotters::style::RGBAColor;
use std::ops::Range;

// ============================================================================
// STYLE CONSTANTS
// ============================================================================

pub const AXIS_LABELS: [&str; 3] = ["X-axis", "Y-axis", "Z-axis"];

/// Fixed limits of every cell plot, on all three axes.
pub const CELL_LIMITS: (f64, f64) = (0.0, 1.5);

pub const CELL_FACE_FILL: RGBAColor = RGBAColor(0, 0, 255, 0.25);
pub const CELL_FACE_EDGE: RGBAColor = RGBAColor(255, 0, 0, 0.25);
pub const CORNER_COLOR: RGBAColor = RGBAColor(0, 0, 255, 1.0);
pub const FACE_CENTER_COLOR: RGBAColor = RGBAColor(0, 128, 0, 1.0);

pub const PLANE_FILL: RGBAColor = RGBAColor(0, 255, 255, 0.5);
pub const PLANE_MARKER_COLOR: RGBAColor = RGBAColor(255, 0, 0, 1.0);

pub const CORNER_LABEL: &str = "Corner atoms";
pub const FACE_CENTER_LABEL: &str = "Face-centered atoms";

/// Marker areas in pt², matching the scatter sizes of the classic plots.
pub const SMALL_MARKER_AREA: f64 = 50.0;
pub const LARGE_MARKER_AREA: f64 = 100.0;

const SCREEN_DPI: f64 = 100.0;

// ============================================================================
// FIGURE MODEL
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct PolygonLayer {
  pub vertices: Vec<Point>,
  pub fill: RGBAColor,
  pub edge: Option<RGBAColor>,
  pub line_width: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLayer {
  pub points: Vec<Point>,
  pub color: RGBAColor,
  /// Marker area in pt²
  pub area: f64,
  pub label: Option<String>,
}

impl MarkerLayer {
  /// Circle radius in pixels for a marker of `area` pt².
  pub fn radius_px(&self) -> u32 {
    let radius_pt = self.area.max(0.0).sqrt() / 2.0;
    (radius_pt * SCREEN_DPI / 72.0).round().max(1.0) as u32
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisLimits {
  /// Same [min, max] on all three axes.
  Fixed(f64, f64),
  /// Fit to the data with a small margin.
  Auto,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
  pub title: String,
  pub axis_labels: [&'static str; 3],
  pub limits: AxisLimits,
  /// Drawn in list order, before markers.
  pub polygons: Vec<PolygonLayer>,
  pub markers: Vec<MarkerLayer>,
  pub legend: bool,
}

impl Figure {
  /// Axis ranges handed to the 3D chart, in x, y, z order.
  pub fn ranges(&self) -> [Range<f64>; 3] {
    match self.limits {
      AxisLimits::Fixed(min, max) => [min..max, min..max, min..max],
      AxisLimits::Auto => self.auto_ranges(),
    }
  }

  fn auto_ranges(&self) -> [Range<f64>; 3] {
    let points = self
      .markers
      .iter()
      .flat_map(|m| m.points.iter())
      .chain(self.polygons.iter().flat_map(|p| p.vertices.iter()));

    let mut lo = [f64::INFINITY; 3];
    let mut hi = [f64::NEG_INFINITY; 3];
    for p in points {
      for axis in 0..3 {
        lo[axis] = lo[axis].min(p[axis]);
        hi[axis] = hi[axis].max(p[axis]);
      }
    }

    let mut out = [0.0..1.0, 0.0..1.0, 0.0..1.0];
    for axis in 0..3 {
      if !lo[axis].is_finite() || !hi[axis].is_finite() {
        continue; // empty figure: keep unit range
      }
      let span = hi[axis] - lo[axis];
      let pad = if span > 1e-9 { span * 0.05 } else { 0.5 };
      out[axis] = (lo[axis] - pad)..(hi[axis] + pad);
    }
    out
  }
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Cell plot: translucent faces, corner markers and optional highlights,
/// fixed [0, 1.5] limits and a legend.
pub fn structure_figure(
  points: &[Point],
  faces: &[Face],
  title: &str,
  highlight: Option<&[Point]>,
) -> Figure {
  let polygons = faces
    .iter()
    .map(|face| PolygonLayer {
      vertices: face.to_vec(),
      fill: CELL_FACE_FILL,
      edge: Some(CELL_FACE_EDGE),
      line_width: 1,
    })
    .collect();

  let mut markers = vec![MarkerLayer {
    points: points.to_vec(),
    color: CORNER_COLOR,
    area: SMALL_MARKER_AREA,
    label: Some(CORNER_LABEL.to_string()),
  }];

  if let Some(hl) = highlight.filter(|hl| !hl.is_empty()) {
    markers.push(MarkerLayer {
      points: hl.to_vec(),
      color: FACE_CENTER_COLOR,
      area: LARGE_MARKER_AREA,
      label: Some(FACE_CENTER_LABEL.to_string()),
    });
  }

  Figure {
    title: title.to_string(),
    axis_labels: AXIS_LABELS,
    limits: AxisLimits::Fixed(CELL_LIMITS.0, CELL_LIMITS.1),
    polygons,
    markers,
    legend: true,
  }
}

/// Plane plot: one cyan polygon plus red vertex markers. Limits follow the data.
pub fn plane_figure(points: &[Point], title: &str) -> Figure {
  Figure {
    title: title.to_string(),
    axis_labels: AXIS_LABELS,
    limits: AxisLimits::Auto,
    polygons: vec![PolygonLayer {
      vertices: points.to_vec(),
      fill: PLANE_FILL,
      edge: None,
      line_width: 1,
    }],
    markers: vec![MarkerLayer {
      points: points.to_vec(),
      color: PLANE_MARKER_COLOR,
      area: SMALL_MARKER_AREA,
      label: None,
    }],
    legend: false,
  }
}

/// Convenience wrapper: the full cell plot of a structure.
pub fn cell_figure(structure: &Structure) -> Figure {
  structure_figure(
    &structure.all_points(),
    &structure.faces(),
    &structure.title(),
    structure.face_centers,
  )
}
