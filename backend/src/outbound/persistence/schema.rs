//! Diesel table definitions for the catalogue store.

diesel::table! {
    categories (id) {
        id -> BigInt,
        title -> Text,
        is_deleted -> Bool,
        created_on -> Timestamp,
        last_updated_on -> Timestamp,
    }
}

diesel::table! {
    products (id) {
        id -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        price -> Nullable<Double>,
        image_url -> Nullable<Text>,
        is_deleted -> Bool,
        created_on -> Timestamp,
        last_updated_on -> Timestamp,
        category_id -> BigInt,
    }
}

diesel::joinable!(products -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(categories, products);
