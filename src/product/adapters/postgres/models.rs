//! Diesel row models for product persistence.

use super::schema::products;
use diesel::prelude::*;

/// Query result row for product records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    /// Database-generated primary key.
    pub id: i64,
    /// Product title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Insert model for product records. The key is left to the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    /// Product title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
}
