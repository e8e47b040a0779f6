use crate::domain::PropertyView;
use crate::templates::format::{baths, humanize, thousands, usd};
use maud::{html, Markup};

const CARD_FEATURES: usize = 2;

pub fn property_card(view: &PropertyView) -> Markup {
    let p = &view.property;
    let cover = view.cover_photo();
    let key_features = view
        .listing
        .as_ref()
        .and_then(|l| l.key_features.as_deref())
        .unwrap_or(&[]);

    html! {
        a href=(format!("/property/{}", p.zpid)) class="property-card" {
            div class="card" {
                div class="card-image h-48 relative" {
                    @if let Some(url) = cover.and_then(|c| c.image_url.as_deref()) {
                        img
                            src=(url)
                            alt=(cover.and_then(|c| c.caption.clone()).unwrap_or_else(|| format!("Property at {}", p.address)))
                            class="w-full h-full object-cover";
                    }
                    span class="badge absolute top-4 left-4" { (p.status) }
                }

                div class="card-body p-4" {
                    h3 class="text-2xl font-bold" { (usd(p.price)) }
                    @if let Some(per_sqft) = p.price_per_sqft {
                        p class="text-sm text-gray-600" { (usd(per_sqft)) "/sqft" }
                    }

                    p class="facts" {
                        span { (p.bedrooms) " bd" }
                        " · "
                        span { (baths(p.bathrooms)) " ba" }
                        " · "
                        span { (thousands(p.sqft)) " sqft" }
                    }

                    p class="text-sm font-medium" { (view.street_address()) }
                    p class="text-sm text-gray-600" { (p.city) ", " (p.state) " " (p.zip_code) }

                    div class="flex justify-between text-sm text-gray-600" {
                        span class="capitalize" { (humanize(&p.property_type)) }
                        span { "Built " (p.year_built) }
                    }

                    @if !key_features.is_empty() {
                        div class="tags" {
                            @for feature in key_features.iter().take(CARD_FEATURES) {
                                span class="tag" { (feature) }
                            }
                            @if key_features.len() > CARD_FEATURES {
                                span class="tag" { "+" (key_features.len() - CARD_FEATURES) " more" }
                            }
                        }
                    }
                }
            }
        }
    }
}
