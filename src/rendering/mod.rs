pub mod chart;
pub mod export;
pub mod figure;

// Re-export specific functions to keep the API clean for the rest of the app
pub use chart::draw_figure;
pub use export::{draw_on_cairo, export_all, export_figure};
pub use figure::{cell_figure, plane_figure, structure_figure, Figure};
