use crate::db::connection::Database;
use astra::{Body, Response};
use rusqlite::Connection;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

const SCHEMA: &str = include_str!("../../sql/schema.sql");

const SEED: &str = r#"
INSERT INTO properties
    (id, zpid, address, city, state, zip_code, latitude, longitude, bedrooms, bathrooms,
     sqft, lot_size_sqft, year_built, property_type, stories, garage_spaces, parking_spaces,
     price, price_per_sqft, hoa_fee, property_tax, status, listing_type)
VALUES
    (1, '1001', '5801 College Ave', 'Oakland', 'CA', '94618', 37.846, -122.252, 2, 1.0,
     980, NULL, 1931, 'condo', 1, 0, 1, 600000, 612.24, 450, 7200, 'For Sale', 'standard'),
    (2, '1002', '412 Alcatraz Ave', 'Oakland', 'CA', '94609', 37.850, -122.258, 3, 2.0,
     1420, 4000, 1915, 'single_family', 2, 1, 2, 800000, 563.38, NULL, NULL, 'For Sale', 'standard'),
    (3, '1003', '6120 Chabot Rd', 'Oakland', 'CA', '94618', 37.848, -122.247, 4, 2.5,
     2100, 5200, 1926, 'single_family', 2, 2, 2, 900000, 428.57, NULL, 10800, 'Pending', 'standard'),
    (4, '1004', '78 Florence Ave', 'Oakland', 'CA', '94618', 37.842, -122.244, 3, 2.0,
     1600, NULL, 2005, 'townhouse', 3, 1, 1, 1200000, 750.0, 300, NULL, 'For Sale', 'new_construction'),
    (5, '1005', '2950 Claremont Blvd', 'Berkeley', 'CA', '94705', 37.859, -122.242, 5, 3.5,
     3400, 8000, 1910, 'single_family', 3, 2, 4, 1500000, 441.18, NULL, NULL, 'For Sale', 'standard');

INSERT INTO listings
    (property_id, list_date, days_on_market, description, key_features, agent_name,
     agent_phone, agent_email, brokerage, open_house_dates, tour_available,
     virtual_tour_url, original_price, price_changes)
VALUES
    (1, '2024-03-05', 12, 'Bright top-floor condo near College Avenue shops.',
     '["Bay views","Updated kitchen"]', 'Dana Reyes', '510-555-0101', 'dana@example.com',
     'Rockridge Realty', '2024-03-09, 2024-03-10', 1, NULL, 625000,
     '[{"date":"2024-03-20","price":600000}]'),
    (2, '2024-02-01', 40, NULL, 'Garden, Deck, Original details', NULL, NULL, NULL, NULL,
     NULL, 0, NULL, NULL, 'not json');

INSERT INTO property_features
    (property_id, flooring_types, kitchen_features, bathroom_features, fireplace,
     fireplace_count, laundry_features, cooling, heating, yard_features, pool, spa,
     garage_type, security_features, accessibility_features, green_features,
     school_district, walkability_score, transit_score, bike_score)
VALUES
    (1, '["Hardwood","Tile"]', 'Gas range, Quartz counters', NULL, 1, 1, 'In unit',
     NULL, 'Forced air', NULL, 0, 0, NULL, NULL, NULL, '', 'Oakland Unified', 95, 85, 80);

INSERT INTO property_photos (property_id, photo_url, caption, room_type, is_primary, sort_order, image_url)
VALUES
    (1, NULL, 'Kitchen', 'kitchen', 0, 1, 'https://img.example/kitchen.jpg'),
    (1, 'https://img.example/legacy.jpg', 'Bedroom', 'bedroom', 0, 2, NULL),
    (1, NULL, 'Living room', 'living_room', 0, 0, 'https://img.example/living.jpg'),
    (1, NULL, 'Front', 'exterior', 1, 0, 'https://img.example/front.jpg'),
    (3, NULL, 'Street view', 'exterior', 1, 0, 'https://img.example/chabot.jpg');
"#;

/// Writes a small listings database to `path` using the production schema.
pub fn write_seed_db(path: &Path) {
    let conn = Connection::open(path).expect("create seed db");
    conn.execute_batch(SCHEMA).expect("apply schema");
    conn.execute_batch(SEED).expect("insert seed rows");
}

/// Seeded database in a fresh temp dir, opened the way the server opens it.
/// Keep the `TempDir` alive for as long as the handle is used.
pub fn seeded_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("listings.db");
    write_seed_db(&path);

    let db = Database::open(&path).expect("open seeded db");
    (dir, db)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    let mut raw: Body = resp.into_body();
    raw.reader().read_to_string(&mut body).unwrap();
    body
}
