use crate::domain::text_list::{decode_price_history, decode_text_list};
use serde::Serialize;
use serde_json::Value;

/// Raw `listings` row. Collection columns are still text here.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub list_date: String,
    pub days_on_market: Option<i64>,
    pub description: Option<String>,
    pub key_features: Option<String>,
    pub agent_name: Option<String>,
    pub agent_phone: Option<String>,
    pub agent_email: Option<String>,
    pub brokerage: Option<String>,
    pub open_house_dates: Option<String>,
    pub tour_available: bool,
    pub virtual_tour_url: Option<String>,
    pub original_price: Option<f64>,
    pub price_changes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub list_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_on_market: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brokerage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_house_dates: Option<Vec<String>>,
    pub tour_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_tour_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_changes: Option<Value>,
}

impl From<ListingRecord> for ListingView {
    fn from(rec: ListingRecord) -> Self {
        ListingView {
            key_features: decode_text_list(rec.key_features.as_deref()),
            open_house_dates: decode_text_list(rec.open_house_dates.as_deref()),
            price_changes: decode_price_history(rec.price_changes.as_deref()),
            list_date: rec.list_date,
            days_on_market: rec.days_on_market,
            description: rec.description,
            agent_name: rec.agent_name,
            agent_phone: rec.agent_phone,
            agent_email: rec.agent_email,
            brokerage: rec.brokerage,
            tour_available: rec.tour_available,
            virtual_tour_url: rec.virtual_tour_url,
            original_price: rec.original_price,
        }
    }
}
