pub mod error;
pub mod property_card;
pub mod search_filters;

pub use error::html_error_response;
pub use property_card::property_card;
pub use search_filters::search_filters;
