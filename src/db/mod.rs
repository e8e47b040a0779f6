pub mod assemble;
pub mod connection;
pub mod properties;

pub use assemble::{all_property_views, find_property_view, search_property_views};
pub use connection::Database;
