use crate::domain::text_list::decode_text_list;
use serde::Serialize;

/// Raw `property_features` row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeaturesRecord {
    pub flooring_types: Option<String>,
    pub kitchen_features: Option<String>,
    pub bathroom_features: Option<String>,
    pub fireplace: bool,
    pub fireplace_count: Option<i64>,
    pub laundry_features: Option<String>,
    pub cooling: Option<String>,
    pub heating: Option<String>,
    pub yard_features: Option<String>,
    pub pool: bool,
    pub spa: bool,
    pub garage_type: Option<String>,
    pub security_features: Option<String>,
    pub accessibility_features: Option<String>,
    pub green_features: Option<String>,
    pub school_district: Option<String>,
    pub walkability_score: Option<i64>,
    pub transit_score: Option<i64>,
    pub bike_score: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flooring_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kitchen_features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathroom_features: Option<Vec<String>>,
    pub fireplace: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fireplace_count: Option<i64>,
    // Laundry, heating, cooling and garage are free text, not lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laundry_features: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooling: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yard_features: Option<Vec<String>>,
    pub pool: bool,
    pub spa: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green_features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walkability_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bike_score: Option<i64>,
}

impl FeaturesView {
    pub fn has_scores(&self) -> bool {
        self.walkability_score.is_some() || self.transit_score.is_some() || self.bike_score.is_some()
    }
}

impl From<FeaturesRecord> for FeaturesView {
    fn from(rec: FeaturesRecord) -> Self {
        FeaturesView {
            flooring_types: decode_text_list(rec.flooring_types.as_deref()),
            kitchen_features: decode_text_list(rec.kitchen_features.as_deref()),
            bathroom_features: decode_text_list(rec.bathroom_features.as_deref()),
            yard_features: decode_text_list(rec.yard_features.as_deref()),
            security_features: decode_text_list(rec.security_features.as_deref()),
            accessibility_features: decode_text_list(rec.accessibility_features.as_deref()),
            green_features: decode_text_list(rec.green_features.as_deref()),
            fireplace: rec.fireplace,
            fireplace_count: rec.fireplace_count,
            laundry_features: rec.laundry_features,
            cooling: rec.cooling,
            heating: rec.heating,
            pool: rec.pool,
            spa: rec.spa,
            garage_type: rec.garage_type,
            school_district: rec.school_district,
            walkability_score: rec.walkability_score,
            transit_score: rec.transit_score,
            bike_score: rec.bike_score,
        }
    }
}
