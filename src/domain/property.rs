// src/domain/property.rs

use crate::domain::{FeaturesView, ListingView, Photo};
use serde::Serialize;

/// One row of the `properties` table.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    // Internal key, used only to look up related rows.
    #[serde(skip)]
    pub id: i64,
    pub zpid: String,

    // Location
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,

    // Physical attributes
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub sqft: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_size_sqft: Option<i64>,
    pub year_built: i64,
    pub property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garage_spaces: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_spaces: Option<i64>,

    // Commercial attributes
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_sqft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoa_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_tax: Option<f64>,
    pub status: String,
    pub listing_type: String,
}

/// A property merged with its listing, features and photos.
/// This is what the API and the pages render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyView {
    #[serde(flatten)]
    pub property: PropertyRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<ListingView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesView>,
    pub photos: Vec<Photo>,
}

impl PropertyView {
    /// The photo shown on cards: the primary one, else the first.
    pub fn cover_photo(&self) -> Option<&Photo> {
        self.photos
            .iter()
            .find(|p| p.is_primary)
            .or_else(|| self.photos.first())
    }

    /// Street part of the address, without any trailing city/state.
    pub fn street_address(&self) -> &str {
        self.property
            .address
            .split(',')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.property.address)
    }
}
