pub mod features;
pub mod filters;
pub mod listing;
pub mod photo;
pub mod property;
pub mod text_list;

pub use features::{FeaturesRecord, FeaturesView};
pub use filters::SearchFilters;
pub use listing::{ListingRecord, ListingView};
pub use photo::Photo;
pub use property::{PropertyRecord, PropertyView};
