table! {
    items (id) {
        id -> Int4,
        title -> Varchar,
        description -> Nullable<Varchar>,
        owner_id -> Int4,
    }
}

table! {
    users (id) {
        id -> Int4,
        email -> Varchar,
        hashed_password -> Varchar,
        is_active -> Bool,
    }
}

joinable!(items -> users (owner_id));

allow_tables_to_appear_in_same_query!(
    items,
    users,
);
