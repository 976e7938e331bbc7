// src/rendering/chart.rs

use super::figure::{Figure, MarkerLayer, PolygonLayer};
use crate::config::ViewSettings;
use crate::model::Point;

use plotters::backend::DrawingBackend;
use plotters::coord::cartesian::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;

type Coord3 = (f64, f64, f64);
type Chart3d<'a, DB> = ChartContext<'a, DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>;

fn to_coord(p: &Point) -> Coord3 {
  (p[0], p[1], p[2])
}

/// Draws a figure onto ANY plotters backend (GTK screen, PNG, PDF or SVG).
pub fn draw_figure<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  figure: &Figure,
  view: &ViewSettings,
) -> Result<(), Box<dyn std::error::Error>>
where
  DB::ErrorType: 'static,
{
  let [x_range, y_range, z_range] = figure.ranges();

  let mut chart = ChartBuilder::on(root)
    .caption(&figure.title, ("sans-serif", 20))
    .margin(20)
    .build_cartesian_3d(x_range.clone(), y_range.clone(), z_range.clone())?;

  chart.with_projection(|mut pb| {
    pb.pitch = view.pitch;
    pb.yaw = view.yaw;
    pb.scale = view.scale;
    pb.into_matrix()
  });

  chart
    .configure_axes()
    .light_grid_style(BLACK.mix(0.1))
    .max_light_lines(3)
    .draw()?;

  // Axis titles sit just past the far end of each axis
  let label_style = ("sans-serif", 14).into_font().color(&BLACK);
  let [x_label, y_label, z_label] = figure.axis_labels;
  let overshoot = |r: &std::ops::Range<f64>| r.end + (r.end - r.start) * 0.08;
  chart.draw_series([
    Text::new(
      x_label,
      (overshoot(&x_range), y_range.start, z_range.start),
      label_style.clone(),
    ),
    Text::new(
      y_label,
      (x_range.start, overshoot(&y_range), z_range.start),
      label_style.clone(),
    ),
    Text::new(
      z_label,
      (x_range.start, y_range.start, overshoot(&z_range)),
      label_style,
    ),
  ])?;

  // Faces in list order; no depth sorting
  for layer in &figure.polygons {
    draw_polygon(&mut chart, layer)?;
  }

  for layer in &figure.markers {
    draw_markers(&mut chart, layer)?;
  }

  if figure.legend {
    chart
      .configure_series_labels()
      .background_style(WHITE.mix(0.8))
      .border_style(BLACK)
      .draw()?;
  }

  root.present()?;
  Ok(())
}

fn draw_polygon<DB: DrawingBackend>(
  chart: &mut Chart3d<'_, DB>,
  layer: &PolygonLayer,
) -> Result<(), Box<dyn std::error::Error>>
where
  DB::ErrorType: 'static,
{
  let vertices: Vec<Coord3> = layer.vertices.iter().map(to_coord).collect();
  if vertices.len() < 3 {
    return Ok(());
  }

  chart.draw_series(std::iter::once(Polygon::new(
    vertices.clone(),
    layer.fill.filled(),
  )))?;

  if let Some(edge) = layer.edge {
    let mut outline = vertices.clone();
    outline.push(vertices[0]);
    chart.draw_series(std::iter::once(PathElement::new(
      outline,
      edge.stroke_width(layer.line_width),
    )))?;
  }
  Ok(())
}

fn draw_markers<DB: DrawingBackend>(
  chart: &mut Chart3d<'_, DB>,
  layer: &MarkerLayer,
) -> Result<(), Box<dyn std::error::Error>>
where
  DB::ErrorType: 'static,
{
  let radius = layer.radius_px();
  let color = layer.color;

  let series = chart.draw_series(
    layer
      .points
      .iter()
      .map(|p| Circle::new(to_coord(p), radius, color.filled())),
  )?;

  if let Some(label) = &layer.label {
    series
      .label(label.as_str())
      .legend(move |(x, y)| Circle::new((x, y), radius, color.filled()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{lookup_slip_plane, slip_plane_labels, structure_for, CrystalSystem};
  use crate::rendering::figure::{cell_figure, plane_figure};

  fn render_svg(figure: &Figure) -> String {
    let mut buf = String::new();
    {
      let root = SVGBackend::with_string(&mut buf, (640, 480)).into_drawing_area();
      root.fill(&WHITE).unwrap();
      draw_figure(&root, figure, &ViewSettings::default()).unwrap();
    }
    buf
  }

  #[test]
  fn test_cell_plots_render() {
    for system in CrystalSystem::ALL {
      let svg = render_svg(&cell_figure(&structure_for(system)));
      assert!(svg.contains(&format!("{} Crystal System", system.name())));
      assert!(svg.contains("Corner atoms"));
      assert!(svg.contains("X-axis"));
    }
  }

  #[test]
  fn test_fcc_legend_has_face_centers() {
    let svg = render_svg(&cell_figure(&structure_for(CrystalSystem::Fcc)));
    assert!(svg.contains("Face-centered atoms"));

    let svg = render_svg(&cell_figure(&structure_for(CrystalSystem::Bcc)));
    assert!(!svg.contains("Face-centered atoms"));
  }

  #[test]
  fn test_every_slip_plane_renders() {
    for system in CrystalSystem::ALL {
      for label in slip_plane_labels(system) {
        let plane = lookup_slip_plane(system, label).unwrap();
        let svg = render_svg(&plane_figure(plane.points, &plane.title()));
        assert!(svg.contains("Slip Plane"));
        assert!(svg.contains("<polygon"));
      }
    }
  }

  #[test]
  fn test_same_figure_same_svg() {
    let fig = cell_figure(&structure_for(CrystalSystem::Fcc));
    assert_eq!(render_svg(&fig), render_svg(&fig));
  }
}
