// templates/pages/home.rs

use crate::domain::{PropertyView, SearchFilters};
use crate::templates::{desktop_layout, property_card, search_filters};
use maud::{html, Markup};

pub fn home_page(filters: &SearchFilters, properties: &[PropertyView]) -> Markup {
    desktop_layout(
        "Homes for sale",
        html! {
            section class="hero" {
                h1 { "Find Your Dream Home" }
                p { "Discover properties in Oakland's Rockridge neighborhood" }
            }

            main class="container" {
                (search_filters(filters))

                section {
                    div class="flex items-center justify-between mb-6" {
                        @if filters.is_unfiltered() {
                            h2 { "Properties for sale" }
                        } @else {
                            h2 { "Search results" }
                        }
                        p class="result-count" { (properties.len()) " results" }
                    }

                    @if properties.is_empty() {
                        div class="empty-state" {
                            h3 { "No properties found" }
                            p { "Try adjusting your search filters to see more results." }
                        }
                    } @else {
                        div class="grid grid-cols-3 gap-6" {
                            @for view in properties {
                                (property_card(view))
                            }
                        }
                    }
                }
            }
        },
    )
}
