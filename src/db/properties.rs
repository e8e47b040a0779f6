use crate::domain::{PropertyRecord, SearchFilters};
use crate::errors::ServerError;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const PROPERTY_COLUMNS: &str = r#"
    id, zpid, address, city, state, zip_code, latitude, longitude,
    bedrooms, bathrooms, sqft, lot_size_sqft, year_built, property_type,
    stories, garage_spaces, parking_spaces,
    price, price_per_sqft, hoa_fee, property_tax, status, listing_type
"#;

fn property_from_row(row: &Row<'_>) -> rusqlite::Result<PropertyRecord> {
    Ok(PropertyRecord {
        id: row.get("id")?,
        zpid: row.get("zpid")?,
        address: row.get("address")?,
        city: row.get("city")?,
        state: row.get("state")?,
        zip_code: row.get("zip_code")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        bedrooms: row.get("bedrooms")?,
        bathrooms: row.get("bathrooms")?,
        sqft: row.get("sqft")?,
        lot_size_sqft: row.get("lot_size_sqft")?,
        year_built: row.get("year_built")?,
        property_type: row.get("property_type")?,
        stories: row.get("stories")?,
        garage_spaces: row.get("garage_spaces")?,
        parking_spaces: row.get("parking_spaces")?,
        price: row.get("price")?,
        price_per_sqft: row.get("price_per_sqft")?,
        hoa_fee: row.get("hoa_fee")?,
        property_tax: row.get("property_tax")?,
        status: row.get("status")?,
        listing_type: row.get("listing_type")?,
    })
}

/// Escapes LIKE wildcards so user text matches literally (paired with `ESCAPE '\'`).
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Runs a catalog search.
///
/// Only the supplied criteria become predicates. Rows come back most
/// expensive first, with the internal id as tie-break so that consecutive
/// pages never overlap.
pub fn search_properties(
    conn: &Connection,
    filters: &SearchFilters,
) -> Result<Vec<PropertyRecord>, ServerError> {
    let mut sql = format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE 1=1");
    let mut values: Vec<Value> = Vec::new();

    if let Some(search) = &filters.search {
        sql.push_str(r" AND (address LIKE ?1 ESCAPE '\' OR city LIKE ?1 ESCAPE '\')");
        values.push(Value::Text(format!("%{}%", escape_like(search))));
    }

    if let Some(min_price) = filters.min_price {
        sql.push_str(&format!(" AND price >= ?{}", values.len() + 1));
        values.push(Value::Real(min_price));
    }

    if let Some(max_price) = filters.max_price {
        sql.push_str(&format!(" AND price <= ?{}", values.len() + 1));
        values.push(Value::Real(max_price));
    }

    if let Some(bedrooms) = filters.bedrooms {
        sql.push_str(&format!(" AND bedrooms >= ?{}", values.len() + 1));
        values.push(Value::Integer(i64::from(bedrooms)));
    }

    if let Some(bathrooms) = filters.bathrooms {
        sql.push_str(&format!(" AND bathrooms >= ?{}", values.len() + 1));
        values.push(Value::Real(bathrooms));
    }

    if let Some(property_type) = &filters.property_type {
        sql.push_str(&format!(" AND property_type = ?{}", values.len() + 1));
        values.push(Value::Text(property_type.clone()));
    }

    sql.push_str(&format!(
        " ORDER BY price DESC, id ASC LIMIT ?{} OFFSET ?{}",
        values.len() + 1,
        values.len() + 2
    ));
    values.push(Value::Integer(i64::from(filters.limit)));
    values.push(Value::Integer(i64::from(filters.offset)));

    tracing::debug!(?filters, "searching properties");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), property_from_row)?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Looks a property up by its public zpid. A miss is `Ok(None)`.
pub fn get_property_by_zpid(
    conn: &Connection,
    zpid: &str,
) -> Result<Option<PropertyRecord>, ServerError> {
    conn.query_row(
        &format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE zpid = ?1"),
        params![zpid],
        property_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("property lookup failed: {e}")))
}

/// Every property, most expensive first.
pub fn get_all_properties(conn: &Connection) -> Result<Vec<PropertyRecord>, ServerError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PROPERTY_COLUMNS} FROM properties ORDER BY price DESC, id ASC"
    ))?;

    let rows = stmt.query_map([], property_from_row)?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
