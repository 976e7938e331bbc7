pub mod page;

pub use page::PageWidgets;
