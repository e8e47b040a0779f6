use crate::db::connection::Database;
use crate::router::handle;
use crate::tests::utils::{body_string, seeded_db};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;

fn get_json(db: &Database, uri: &str) -> (u16, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, db).expect("Handler failed");
    let status = resp.status().as_u16();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let body = body_string(resp);
    (status, serde_json::from_str(&body).expect("JSON body"))
}

fn zpids(json: &Value) -> Vec<String> {
    json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["zpid"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn list_returns_highest_priced_match() {
    let (_dir, db) = seeded_db();
    let (status, json) = get_json(&db, "/properties?minPrice=750000&bedrooms=3&limit=1");

    assert_eq!(status, 200);
    assert_eq!(zpids(&json), vec!["1005"]);
    assert_eq!(json["properties"][0]["price"], 1_500_000.0);
    assert_eq!(json["properties"][0]["bedrooms"], 5);
    assert_eq!(json["total"], 1);
}

#[test]
fn list_without_filters_is_ordered_by_price() {
    let (_dir, db) = seeded_db();
    let (status, json) = get_json(&db, "/properties");

    assert_eq!(status, 200);
    assert_eq!(zpids(&json), vec!["1005", "1004", "1003", "1002", "1001"]);
    assert_eq!(json["total"], 5);
}

#[test]
fn total_is_the_page_size() {
    let (_dir, db) = seeded_db();
    let (_, json) = get_json(&db, "/properties?limit=2&offset=2");

    assert_eq!(zpids(&json), vec!["1003", "1002"]);
    assert_eq!(json["total"], 2);
}

#[test]
fn malformed_numbers_are_ignored() {
    let (_dir, db) = seeded_db();
    let (status, json) = get_json(
        &db,
        "/properties?minPrice=cheap&maxPrice=&bedrooms=-2&bathrooms=lots&limit=ten&offset=-1",
    );

    assert_eq!(status, 200);
    assert_eq!(json["total"], 5);
}

#[test]
fn fractional_price_bounds_are_applied() {
    let (_dir, db) = seeded_db();

    let (_, json) = get_json(&db, "/properties?minPrice=1200000.50");
    assert_eq!(zpids(&json), vec!["1005"]);

    let (_, json) = get_json(&db, "/properties?maxPrice=650000.0");
    assert_eq!(zpids(&json), vec!["1001"]);

    let (_, json) = get_json(&db, "/properties?limit=2.0");
    assert_eq!(json["total"], 2);
}

#[test]
fn search_text_is_url_decoded() {
    let (_dir, db) = seeded_db();

    let (_, encoded) = get_json(&db, "/properties?search=College%20Ave");
    assert_eq!(zpids(&encoded), vec!["1001"]);

    let (_, plus) = get_json(&db, "/api/properties?search=college+ave");
    assert_eq!(zpids(&plus), vec!["1001"]);
}

#[test]
fn property_type_and_bathrooms_filter() {
    let (_dir, db) = seeded_db();
    let (_, json) = get_json(&db, "/properties?propertyType=single_family&bathrooms=2.5");

    assert_eq!(zpids(&json), vec!["1005", "1003"]);
}

#[test]
fn detail_returns_assembled_view() {
    let (_dir, db) = seeded_db();
    let (status, json) = get_json(&db, "/properties/1001");

    assert_eq!(status, 200);
    let property = &json["property"];
    assert_eq!(property["zpid"], "1001");
    assert_eq!(property["zipCode"], "94618");
    assert_eq!(property["listing"]["keyFeatures"][1], "Updated kitchen");
    assert_eq!(property["listing"]["tourAvailable"], true);
    assert_eq!(property["listing"]["priceChanges"][0]["price"], 600000);
    assert_eq!(property["features"]["walkabilityScore"], 95);
    assert_eq!(
        property["features"]["kitchenFeatures"],
        serde_json::json!(["Gas range", "Quartz counters"])
    );
    assert_eq!(property["photos"][0]["imageUrl"], "https://img.example/front.jpg");
    assert_eq!(property["photos"][0]["isPrimary"], true);
    assert_eq!(property["photos"].as_array().unwrap().len(), 4);
}

#[test]
fn detail_without_related_rows_omits_them() {
    let (_dir, db) = seeded_db();
    let (_, json) = get_json(&db, "/api/properties/1005");

    let property = &json["property"];
    assert!(property.get("listing").is_none());
    assert!(property.get("features").is_none());
    assert_eq!(property["photos"], serde_json::json!([]));
}

#[test]
fn unknown_zpid_is_404() {
    let (_dir, db) = seeded_db();
    let (status, json) = get_json(&db, "/properties/999999");

    assert_eq!(status, 404);
    assert_eq!(json, serde_json::json!({ "error": "Property not found" }));
}

#[test]
fn storage_failures_are_500_without_detail() {
    let (_dir, db) = seeded_db();
    db.close();

    let (status, json) = get_json(&db, "/properties");
    assert_eq!(status, 500);
    assert_eq!(json, serde_json::json!({ "error": "Failed to fetch properties" }));

    let (status, json) = get_json(&db, "/properties/1001");
    assert_eq!(status, 500);
    assert_eq!(json, serde_json::json!({ "error": "Failed to fetch property" }));
}

#[test]
fn health_check() {
    let (_dir, db) = seeded_db();
    let (status, json) = get_json(&db, "/health");

    assert_eq!(status, 200);
    assert_eq!(json["status"], "ok");
}
