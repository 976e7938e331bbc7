pub mod controller;
pub mod interactions;

// Re-exports
pub use controller::{render_page, PageView, Selection};
pub use interactions::setup_interactions;
