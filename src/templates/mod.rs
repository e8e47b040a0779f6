pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{html_error_response, property_card, search_filters};
pub use layouts::desktop::desktop_layout;
