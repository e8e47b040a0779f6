use crate::db::connection::Database;
use crate::db::properties::{get_all_properties, get_property_by_zpid, search_properties};
use crate::domain::{
    FeaturesRecord, FeaturesView, ListingRecord, ListingView, Photo, PropertyRecord,
    PropertyView, SearchFilters,
};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// The listing row for a property, if it has one.
pub fn find_listing(
    conn: &Connection,
    property_id: i64,
) -> Result<Option<ListingRecord>, ServerError> {
    conn.query_row(
        r#"
        SELECT
            list_date, days_on_market, description, key_features,
            agent_name, agent_phone, agent_email, brokerage, open_house_dates,
            tour_available, virtual_tour_url, original_price, price_changes
        FROM listings
        WHERE property_id = ?1
        ORDER BY id
        LIMIT 1
        "#,
        params![property_id],
        |row| {
            Ok(ListingRecord {
                list_date: row.get("list_date")?,
                days_on_market: row.get("days_on_market")?,
                description: row.get("description")?,
                key_features: row.get("key_features")?,
                agent_name: row.get("agent_name")?,
                agent_phone: row.get("agent_phone")?,
                agent_email: row.get("agent_email")?,
                brokerage: row.get("brokerage")?,
                open_house_dates: row.get("open_house_dates")?,
                tour_available: row
                    .get::<_, Option<bool>>("tour_available")?
                    .unwrap_or(false),
                virtual_tour_url: row.get("virtual_tour_url")?,
                original_price: row.get("original_price")?,
                price_changes: row.get("price_changes")?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("listing lookup failed: {e}")))
}

/// The features row for a property, if it has one.
pub fn find_features(
    conn: &Connection,
    property_id: i64,
) -> Result<Option<FeaturesRecord>, ServerError> {
    conn.query_row(
        r#"
        SELECT
            flooring_types, kitchen_features, bathroom_features,
            fireplace, fireplace_count, laundry_features, cooling, heating,
            yard_features, pool, spa, garage_type, security_features,
            accessibility_features, green_features, school_district,
            walkability_score, transit_score, bike_score
        FROM property_features
        WHERE property_id = ?1
        ORDER BY id
        LIMIT 1
        "#,
        params![property_id],
        |row| {
            Ok(FeaturesRecord {
                flooring_types: row.get("flooring_types")?,
                kitchen_features: row.get("kitchen_features")?,
                bathroom_features: row.get("bathroom_features")?,
                fireplace: row.get::<_, Option<bool>>("fireplace")?.unwrap_or(false),
                fireplace_count: row.get("fireplace_count")?,
                laundry_features: row.get("laundry_features")?,
                cooling: row.get("cooling")?,
                heating: row.get("heating")?,
                yard_features: row.get("yard_features")?,
                pool: row.get::<_, Option<bool>>("pool")?.unwrap_or(false),
                spa: row.get::<_, Option<bool>>("spa")?.unwrap_or(false),
                garage_type: row.get("garage_type")?,
                security_features: row.get("security_features")?,
                accessibility_features: row.get("accessibility_features")?,
                green_features: row.get("green_features")?,
                school_district: row.get("school_district")?,
                walkability_score: row.get("walkability_score")?,
                transit_score: row.get("transit_score")?,
                bike_score: row.get("bike_score")?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("features lookup failed: {e}")))
}

/// All photos of a property: `sort_order` ascending, primary first on ties.
pub fn find_photos(conn: &Connection, property_id: i64) -> Result<Vec<Photo>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT
            COALESCE(image_url, photo_url) AS image_url,
            caption, room_type, is_primary, sort_order
        FROM property_photos
        WHERE property_id = ?1
        ORDER BY sort_order, is_primary DESC
        "#,
    )?;

    let rows = stmt.query_map(params![property_id], |row| {
        Ok(Photo {
            image_url: row.get("image_url")?,
            caption: row.get("caption")?,
            room_type: row.get("room_type")?,
            is_primary: row.get::<_, Option<bool>>("is_primary")?.unwrap_or(false),
            sort_order: row.get("sort_order")?,
        })
    })?;

    let mut photos = Vec::new();
    for row in rows {
        photos.push(row?);
    }
    Ok(photos)
}

/// Hydrates one property row with its listing, features and photos.
pub fn assemble_property(
    conn: &Connection,
    property: PropertyRecord,
) -> Result<PropertyView, ServerError> {
    let listing = find_listing(conn, property.id)?.map(ListingView::from);
    let features = find_features(conn, property.id)?.map(FeaturesView::from);
    let photos = find_photos(conn, property.id)?;

    Ok(PropertyView {
        property,
        listing,
        features,
        photos,
    })
}

fn assemble_all(
    conn: &Connection,
    rows: Vec<PropertyRecord>,
) -> Result<Vec<PropertyView>, ServerError> {
    rows.into_iter()
        .map(|row| assemble_property(conn, row))
        .collect()
}

/// Search + hydrate in one go.
pub fn search_property_views(
    db: &Database,
    filters: &SearchFilters,
) -> Result<Vec<PropertyView>, ServerError> {
    db.with_conn(|conn| {
        let rows = search_properties(conn, filters)?;
        assemble_all(conn, rows)
    })
}

pub fn find_property_view(db: &Database, zpid: &str) -> Result<Option<PropertyView>, ServerError> {
    db.with_conn(|conn| match get_property_by_zpid(conn, zpid)? {
        Some(row) => assemble_property(conn, row).map(Some),
        None => Ok(None),
    })
}

pub fn all_property_views(db: &Database) -> Result<Vec<PropertyView>, ServerError> {
    db.with_conn(|conn| {
        let rows = get_all_properties(conn)?;
        assemble_all(conn, rows)
    })
}
