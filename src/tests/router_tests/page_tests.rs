use crate::db::connection::Database;
use crate::errors::{ResultResp, ServerError};
use crate::router::handle;
use crate::tests::utils::{body_string, seeded_db};
use astra::Body;
use http::{Method, Request};

fn request(db: &Database, method: Method, uri: &str) -> ResultResp {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, db)
}

#[test]
fn home_page_lists_every_property() {
    let (_dir, db) = seeded_db();
    let resp = request(&db, Method::GET, "/").expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("5 results"));
    assert!(body.contains("$1,500,000"));
    assert!(body.contains("href=\"/property/1001\""));
}

#[test]
fn home_page_cards_cap_key_features_at_two() {
    let (_dir, db) = seeded_db();
    let body = body_string(request(&db, Method::GET, "/").expect("Handler failed"));

    // 1002 has three key features, 1001 exactly two.
    assert!(body.contains(concat!(
        r#"<div class="tags">"#,
        r#"<span class="tag">Garden</span>"#,
        r#"<span class="tag">Deck</span>"#,
        r#"<span class="tag">+1 more</span>"#,
        "</div>"
    )));
    assert!(body.contains(concat!(
        r#"<div class="tags">"#,
        r#"<span class="tag">Bay views</span>"#,
        r#"<span class="tag">Updated kitchen</span>"#,
        "</div>"
    )));
    assert_eq!(body.matches(" more</span>").count(), 1);
    assert!(!body.contains("Original details"));
}

#[test]
fn home_page_applies_filters() {
    let (_dir, db) = seeded_db();
    let resp = request(&db, Method::GET, "/?propertyType=condo").expect("Handler failed");

    let body = body_string(resp);
    assert!(body.contains("1 results"));
    assert!(body.contains("5801 College Ave"));
    assert!(!body.contains("2950 Claremont Blvd"));
    assert!(body.contains(r#"<option value="condo" selected>"#));
}

#[test]
fn home_page_with_no_matches_shows_empty_state() {
    let (_dir, db) = seeded_db();
    let resp = request(&db, Method::GET, "/?minPrice=9000000").expect("Handler failed");

    let body = body_string(resp);
    assert!(body.contains("No properties found"));
}

#[test]
fn detail_page_renders_all_sections() {
    let (_dir, db) = seeded_db();
    let resp = request(&db, Method::GET, "/property/1001").expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("5801 College Ave"));
    assert!(body.contains("Features &amp; Amenities"));
    assert!(body.contains("Flooring: Hardwood, Tile"));
    assert!(body.contains("Walk Score"));
    assert!(body.contains("March 5, 2024"));
    assert!(body.contains("Dana Reyes"));
    assert!(body.contains("https://img.example/legacy.jpg"));
}

#[test]
fn unknown_detail_page_is_404() {
    let (_dir, db) = seeded_db();
    let resp = request(&db, Method::GET, "/property/424242").expect("Handler failed");

    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Property Not Found"));
}

#[test]
fn unknown_routes_and_methods_are_not_found() {
    let (_dir, db) = seeded_db();

    assert!(matches!(
        request(&db, Method::GET, "/nowhere"),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        request(&db, Method::POST, "/properties"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn closed_database_fails_page_requests() {
    let (_dir, db) = seeded_db();
    db.close();

    assert!(matches!(
        request(&db, Method::GET, "/"),
        Err(ServerError::DbError(_))
    ));
}
