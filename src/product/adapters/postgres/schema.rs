//! Diesel schema for product persistence.

diesel::table! {
    /// Product catalogue rows.
    products (id) {
        /// Database-generated primary key.
        id -> Int8,
        /// Product title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
    }
}
