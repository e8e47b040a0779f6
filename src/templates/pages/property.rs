use crate::domain::{FeaturesView, ListingView, PropertyView};
use crate::templates::desktop_layout;
use crate::templates::format::{baths, humanize, long_date, thousands, usd};
use maud::{html, Markup};

pub fn property_page(view: &PropertyView) -> Markup {
    let p = &view.property;

    desktop_layout(
        &p.address,
        html! {
            section class="property-hero" {
                @if let Some(url) = view.cover_photo().and_then(|c| c.image_url.as_deref()) {
                    img src=(url) alt=(format!("Property at {}", p.address)) class="w-full object-cover";
                }
                span class="badge" { (p.status) }
                h1 class="text-4xl font-bold" { (usd(p.price)) }
                @if let Some(per_sqft) = p.price_per_sqft {
                    p class="text-lg" { (usd(per_sqft)) "/sqft" }
                }
            }

            main class="container property-detail" {
                section class="card" {
                    h2 { (p.address) }
                    p { (p.city) ", " (p.state) " " (p.zip_code) }
                    p class="text-sm text-gray-600" { "ZPID: " (p.zpid) }
                    p class="text-sm text-gray-600" { "Built in " (p.year_built) }

                    div class="grid grid-cols-4 facts" {
                        div { p { "Bedrooms" } p class="font-semibold" { (p.bedrooms) } }
                        div { p { "Bathrooms" } p class="font-semibold" { (baths(p.bathrooms)) } }
                        div { p { "Square Feet" } p class="font-semibold" { (thousands(p.sqft)) } }
                        div { p { "Type" } p class="font-semibold capitalize" { (humanize(&p.property_type)) } }
                    }
                }

                @if let Some(description) = view.listing.as_ref().and_then(|l| l.description.as_deref()) {
                    section class="card" {
                        h3 { "Description" }
                        p { (description) }
                    }
                }

                (details_card(view))

                @if let Some(features) = &view.features {
                    (features_card(features))
                    @if features.has_scores() {
                        (scores_card(features))
                    }
                }

                @if let Some(listing) = &view.listing {
                    (listing_card(listing))
                }

                @if !view.photos.is_empty() {
                    section class="card gallery" {
                        h3 { "Photos" }
                        div class="grid grid-cols-3 gap-4" {
                            @for photo in &view.photos {
                                @if let Some(url) = &photo.image_url {
                                    figure {
                                        img src=(url) alt=(photo.caption.as_deref().unwrap_or("Property photo"));
                                        @if let Some(caption) = &photo.caption {
                                            figcaption { (caption) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                p { a href="/" { "← Back to listings" } }
            }
        },
    )
}

fn detail_row(label: &str, value: Markup) -> Markup {
    html! {
        div class="flex justify-between" {
            span class="text-gray-600" { (label) ":" }
            span class="font-medium" { (value) }
        }
    }
}

fn details_card(view: &PropertyView) -> Markup {
    let p = &view.property;

    html! {
        section class="card" {
            h3 { "Property Details" }
            div class="grid grid-cols-2 gap-4" {
                (detail_row("Property Type", html! { (humanize(&p.property_type)) }))
                (detail_row("Year Built", html! { (p.year_built) }))
                (detail_row("Stories", html! {
                    @match p.stories { Some(n) => { (n) }, None => { "N/A" } }
                }))
                (detail_row("Garage Spaces", html! { (p.garage_spaces.unwrap_or(0)) }))
                (detail_row("Parking Spaces", html! { (p.parking_spaces.unwrap_or(0)) }))
                (detail_row("Lot Size", html! {
                    @match p.lot_size_sqft { Some(n) => { (thousands(n)) " sqft" }, None => { "N/A" } }
                }))
                (detail_row("HOA Fee", html! {
                    @match p.hoa_fee { Some(fee) => { (usd(fee)) "/month" }, None => { "None" } }
                }))
                (detail_row("Property Tax", html! {
                    @match p.property_tax { Some(tax) => { (usd(tax)) "/year" }, None => { "N/A" } }
                }))
                (detail_row("Listing Type", html! { (humanize(&p.listing_type)) }))
                @if let Some(district) = view.features.as_ref().and_then(|f| f.school_district.as_deref()) {
                    (detail_row("School District", html! { (district) }))
                }
            }
        }
    }
}

fn joined(items: &Option<Vec<String>>) -> Option<String> {
    items
        .as_ref()
        .filter(|v| !v.is_empty())
        .map(|v| v.join(", "))
}

fn features_card(f: &FeaturesView) -> Markup {
    html! {
        section class="card" {
            h3 { "Features & Amenities" }
            div class="grid grid-cols-3 gap-6" {
                div {
                    h4 { "Interior" }
                    @if let Some(flooring) = joined(&f.flooring_types) {
                        p { "Flooring: " (flooring) }
                    }
                    @if let Some(kitchen) = joined(&f.kitchen_features) {
                        p { "Kitchen: " (kitchen) }
                    }
                    @if let Some(bath) = joined(&f.bathroom_features) {
                        p { "Bathroom: " (bath) }
                    }
                    @if f.fireplace {
                        p {
                            "Fireplace"
                            @if let Some(count) = f.fireplace_count {
                                " (" (count) ")"
                            }
                        }
                    }
                    @if let Some(laundry) = &f.laundry_features {
                        p { "Laundry: " (laundry) }
                    }
                }
                div {
                    h4 { "Systems" }
                    @if let Some(heating) = &f.heating {
                        p { "Heating: " (heating) }
                    }
                    @if let Some(cooling) = &f.cooling {
                        p { "Cooling: " (cooling) }
                    }
                    @if let Some(garage) = &f.garage_type {
                        p { "Garage: " (garage) }
                    }
                    @if let Some(security) = joined(&f.security_features) {
                        p { "Security: " (security) }
                    }
                    @if let Some(green) = joined(&f.green_features) {
                        p { "Green: " (green) }
                    }
                    @if let Some(access) = joined(&f.accessibility_features) {
                        p { "Accessibility: " (access) }
                    }
                }
                div {
                    h4 { "Exterior" }
                    @if f.pool { p { "Pool" } }
                    @if f.spa { p { "Spa" } }
                    @for yard in f.yard_features.iter().flatten() {
                        p { (yard) }
                    }
                }
            }
        }
    }
}

fn scores_card(f: &FeaturesView) -> Markup {
    let scores = [
        ("Walk Score", f.walkability_score),
        ("Transit Score", f.transit_score),
        ("Bike Score", f.bike_score),
    ];

    html! {
        section class="card" {
            h3 { "Neighborhood Scores" }
            div class="grid grid-cols-3 gap-6 text-center" {
                @for (label, score) in scores {
                    @if let Some(score) = score {
                        div class="score" {
                            span class="text-2xl font-bold" { (score) }
                            h4 { (label) }
                        }
                    }
                }
            }
        }
    }
}

fn listing_card(l: &ListingView) -> Markup {
    html! {
        section class="card" {
            h3 { "Listing Information" }
            (detail_row("Listed", html! { (long_date(&l.list_date)) }))
            @if let Some(days) = l.days_on_market {
                (detail_row("Days on Market", html! { (days) }))
            }
            @if let Some(original) = l.original_price {
                (detail_row("Original Price", html! { (usd(original)) }))
            }
            @if l.tour_available {
                p class="text-green-600" { "Tours available" }
            }
            @if let Some(url) = &l.virtual_tour_url {
                p { a href=(url) { "Virtual tour" } }
            }
            @if let Some(dates) = l.open_house_dates.as_ref().filter(|d| !d.is_empty()) {
                h4 { "Open Houses" }
                ul {
                    @for date in dates {
                        li { (long_date(date)) }
                    }
                }
            }

            @if l.agent_name.is_some() || l.brokerage.is_some() {
                div class="agent" {
                    h4 { "Listing Agent" }
                    @if let Some(name) = &l.agent_name { p class="font-semibold" { (name) } }
                    @if let Some(brokerage) = &l.brokerage { p { (brokerage) } }
                    @if let Some(phone) = &l.agent_phone {
                        p { a href=(format!("tel:{phone}")) { (phone) } }
                    }
                    @if let Some(email) = &l.agent_email {
                        p { a href=(format!("mailto:{email}")) { (email) } }
                    }
                }
            }
        }
    }
}

pub fn not_found_page(zpid: &str) -> Markup {
    desktop_layout(
        "Property Not Found",
        html! {
            main class="container error-page" {
                h1 { "Property Not Found" }
                p { "No property with ZPID " (zpid) " is listed." }
                p { a href="/" { "← Back to listings" } }
            }
        },
    )
}
