use crate::db::{find_property_view, search_property_views, Database};
use crate::domain::{PropertyView, SearchFilters};
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, json_failure, json_response, ResultResp,
};
use crate::templates;
use astra::{Request, Response};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

const PROPERTY_NOT_FOUND: &str = "Property not found";

#[derive(Serialize)]
struct PropertiesPage {
    properties: Vec<PropertyView>,
    // Size of this page, not of the whole result set.
    total: usize,
}

#[derive(Serialize)]
struct PropertyEnvelope {
    property: PropertyView,
}

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => home(&parse_query(&req), db),
        ("GET", "/health") => json_response(200, &json!({ "status": "ok" })),

        // JSON API
        ("GET", "/properties") | ("GET", "/api/properties") => {
            Ok(list_properties(&parse_query(&req), db))
        }
        ("GET", p) => {
            if let Some(zpid) = api_zpid(p) {
                Ok(property_json(zpid, db))
            } else if let Some(zpid) = path_param(p, "/property/") {
                property_page(zpid, db)
            } else {
                Err(ServerError::NotFound)
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

fn list_properties(params: &HashMap<String, String>, db: &Database) -> Response {
    let filters = SearchFilters::from_query(params);

    let result = search_property_views(db, &filters).and_then(|properties| {
        let total = properties.len();
        json_response(200, &PropertiesPage { properties, total })
    });

    result.unwrap_or_else(|e| json_failure(e, PROPERTY_NOT_FOUND, "Failed to fetch properties"))
}

fn property_json(zpid: &str, db: &Database) -> Response {
    let result = find_property_view(db, zpid)
        .and_then(|found| found.ok_or(ServerError::NotFound))
        .and_then(|property| json_response(200, &PropertyEnvelope { property }));

    result.unwrap_or_else(|e| json_failure(e, PROPERTY_NOT_FOUND, "Failed to fetch property"))
}

fn home(params: &HashMap<String, String>, db: &Database) -> ResultResp {
    let filters = SearchFilters::from_query(params);
    let properties = search_property_views(db, &filters)?;
    html_response(templates::pages::home_page(&filters, &properties))
}

fn property_page(zpid: &str, db: &Database) -> ResultResp {
    match find_property_view(db, zpid)? {
        Some(view) => html_response(templates::pages::property_page(&view)),
        None => html_response_with_status(404, templates::pages::not_found_page(zpid)),
    }
}

/// `/properties/{zpid}` or `/api/properties/{zpid}`.
fn api_zpid(path: &str) -> Option<&str> {
    path_param(path, "/properties/").or_else(|| path_param(path, "/api/properties/"))
}

/// The single path segment following `prefix`, if that is all that follows.
fn path_param<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix)
        .map(|rest| rest.trim_end_matches('/'))
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}

/// Decoded query parameters. The first occurrence of a key wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }

    map
}
