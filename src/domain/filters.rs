use std::collections::HashMap;

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_OFFSET: u32 = 0;

/// Criteria for a catalog search. Every criterion is optional and they
/// combine with AND; `None` means "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub property_type: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            search: None,
            min_price: None,
            max_price: None,
            bedrooms: None,
            bathrooms: None,
            property_type: None,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl SearchFilters {
    /// Builds filters from decoded query parameters.
    ///
    /// Empty values, unparsable numbers and negative numbers are all treated
    /// as if the parameter had not been sent. Prices keep their fraction;
    /// counts keep only their whole part (`2.9` bedrooms means 2).
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let number = |key: &str| params.get(key).and_then(|v| non_negative(v));
        let count = |key: &str| number(key).map(whole);

        Self {
            search: text("search"),
            min_price: number("minPrice"),
            max_price: number("maxPrice"),
            bedrooms: count("bedrooms"),
            bathrooms: number("bathrooms"),
            property_type: text("propertyType"),
            limit: count("limit").unwrap_or(DEFAULT_LIMIT),
            offset: count("offset").unwrap_or(DEFAULT_OFFSET),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.property_type.is_none()
    }
}

fn non_negative(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

// Saturates at u32::MAX.
fn whole(n: f64) -> u32 {
    n.trunc() as u32
}
