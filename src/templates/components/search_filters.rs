use crate::domain::SearchFilters;
use maud::{html, Markup};

const MIN_PRICES: &[(u32, &str)] = &[
    (500_000, "$500K"),
    (750_000, "$750K"),
    (1_000_000, "$1M"),
    (1_500_000, "$1.5M"),
    (2_000_000, "$2M"),
];

const MAX_PRICES: &[(u32, &str)] = &[
    (750_000, "$750K"),
    (1_000_000, "$1M"),
    (1_500_000, "$1.5M"),
    (2_000_000, "$2M"),
    (3_000_000, "$3M"),
];

const BEDROOMS: &[u32] = &[1, 2, 3, 4, 5];
const BATHROOMS: &[f64] = &[1.0, 1.5, 2.0, 2.5, 3.0];

const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("single_family", "Single Family"),
    ("condo", "Condo"),
    ("townhouse", "Townhouse"),
];

/// The search form. Submits as GET to `/`, using the same parameter names as
/// the JSON API so a search URL can be reused against `/properties`.
pub fn search_filters(filters: &SearchFilters) -> Markup {
    html! {
        form action="/" method="get" class="card search-filters" {
            div class="flex items-center space-x-4 mb-4" {
                input
                    type="text"
                    name="search"
                    placeholder="Search by address or city"
                    value=(filters.search.as_deref().unwrap_or(""))
                    class="flex-1";
                button type="submit" class="btn" { "Search" }
                a href="/" class="btn-secondary" { "Clear" }
            }

            div class="grid grid-cols-5 gap-4" {
                label {
                    "Min Price"
                    select name="minPrice" {
                        option value="" { "Any" }
                        @for (value, label) in MIN_PRICES {
                            option value=(value) selected[filters.min_price == Some(f64::from(*value))] { (label) }
                        }
                    }
                }
                label {
                    "Max Price"
                    select name="maxPrice" {
                        option value="" { "Any" }
                        @for (value, label) in MAX_PRICES {
                            option value=(value) selected[filters.max_price == Some(f64::from(*value))] { (label) }
                        }
                    }
                }
                label {
                    "Bedrooms"
                    select name="bedrooms" {
                        option value="" { "Any" }
                        @for n in BEDROOMS {
                            option value=(n) selected[filters.bedrooms == Some(*n)] { (n) "+" }
                        }
                    }
                }
                label {
                    "Bathrooms"
                    select name="bathrooms" {
                        option value="" { "Any" }
                        @for n in BATHROOMS {
                            option value=(n) selected[filters.bathrooms == Some(*n)] { (n) "+" }
                        }
                    }
                }
                label {
                    "Property Type"
                    select name="propertyType" {
                        option value="" { "Any" }
                        @for (value, label) in PROPERTY_TYPES {
                            option value=(value) selected[filters.property_type.as_deref() == Some(*value)] { (label) }
                        }
                    }
                }
            }
        }
    }
}
