pub mod home;
pub mod property;

pub use home::home_page;
pub use property::{not_found_page, property_page};
