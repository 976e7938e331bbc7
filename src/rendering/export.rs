// src/rendering/export.rs

use super::chart::draw_figure;
use super::figure::Figure;
use crate::config::{ExportFormat, ViewSettings};
use gtk4::cairo;
use plotters::prelude::*;
use plotters_cairo::CairoBackend;
use std::path::{Path, PathBuf};

/// File-name stem for a figure title, e.g. "FCC Slip Plane (-111)" -> "fcc_slip_plane_-111".
pub fn file_stem(title: &str) -> String {
  let mut out = String::with_capacity(title.len());
  for c in title.chars() {
    if c.is_ascii_alphanumeric() || c == '-' {
      out.push(c.to_ascii_lowercase());
    } else if !out.ends_with('_') {
      out.push('_');
    }
  }
  out.trim_matches('_').to_string()
}

pub fn export_path(dir: &Path, figure: &Figure, format: ExportFormat) -> PathBuf {
  dir.join(format!("{}.{}", file_stem(&figure.title), format.extension()))
}

// --- File Export Entry Point ---
pub fn export_figure(
  figure: &Figure,
  view: &ViewSettings,
  path: &Path,
  format: ExportFormat,
  size: (u32, u32),
) -> Result<(), String> {
  let (width, height) = size;

  match format {
    ExportFormat::Png => {
      let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
        .map_err(|e| e.to_string())?;
      {
        let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;
        draw_on_cairo(&cr, figure, view, size)?;
      }
      let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
      surface.write_to_png(&mut file).map_err(|e| e.to_string())?;
    }
    ExportFormat::Pdf => {
      let surface =
        cairo::PdfSurface::new(width as f64, height as f64, path).map_err(|e| e.to_string())?;
      {
        let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;
        draw_on_cairo(&cr, figure, view, size)?;
      }
      surface.finish();
    }
    ExportFormat::Svg => {
      let root = SVGBackend::new(path, size).into_drawing_area();
      root.fill(&WHITE).map_err(|e| e.to_string())?;
      draw_figure(&root, figure, view).map_err(|e| e.to_string())?;
    }
  }

  log::info!("Exported '{}' to {:?}", figure.title, path);
  Ok(())
}

/// Writes every figure into `dir`, one file each. Returns the written paths.
pub fn export_all(
  figures: &[&Figure],
  view: &ViewSettings,
  dir: &Path,
  format: ExportFormat,
  size: (u32, u32),
) -> Result<Vec<PathBuf>, String> {
  let mut written = Vec::with_capacity(figures.len());
  for figure in figures {
    let path = export_path(dir, figure, format);
    export_figure(figure, view, &path, format, size)?;
    written.push(path);
  }
  Ok(written)
}

/// Plotters-on-cairo drawing shared by the screen and PNG/PDF export.
pub fn draw_on_cairo(
  cr: &cairo::Context,
  figure: &Figure,
  view: &ViewSettings,
  size: (u32, u32),
) -> Result<(), String> {
  let backend = CairoBackend::new(cr, size).map_err(|e| e.to_string())?;
  let root = backend.into_drawing_area();
  root.fill(&WHITE).map_err(|e| e.to_string())?;
  draw_figure(&root, figure, view).map_err(|e| e.to_string())
}
