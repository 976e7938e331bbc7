//src/model/mod.rs
pub mod slip;
pub mod structure;

// Re-exports for cleaner imports
pub use slip::{lookup_slip_plane, slip_plane_labels, SlipPlane, SlipPlaneError};
pub use structure::{structure_for, CrystalSystem, Face, Point, Structure};
