//! Every query and mutation against the database lives here; the handlers
//! under `api/` never touch Diesel directly.

use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;

use crate::api::item_management::models::{Item, ItemIn, NewItem};
use crate::api::user_management::models::{NewUser, User, UserIn};
use crate::schema::{items, users};

pub(crate) fn get_user(conn: &PgConnection, user_id: i32) -> QueryResult<Option<User>> {
    users::table.find(user_id).first::<User>(conn).optional()
}

pub(crate) fn get_user_by_email(conn: &PgConnection, email: &str) -> QueryResult<Option<User>> {
    users::table
        .filter(users::email.eq(email))
        .first::<User>(conn)
        .optional()
}

pub(crate) fn list_users(conn: &PgConnection, skip: i64, limit: i64) -> QueryResult<Vec<User>> {
    user_page(skip, limit).load::<User>(conn)
}

/// Single insert; `RETURNING` brings back the generated id and the
/// `is_active` default. Callers pre-check the email, the unique index is the
/// backstop.
pub(crate) fn create_user(conn: &PgConnection, user: &UserIn) -> QueryResult<User> {
    let new_user = NewUser {
        email: user.email.clone(),
        // stored as given; nothing hashes it here
        hashed_password: user.password.clone(),
    };

    diesel::insert_into(users::table)
        .values(&new_user)
        .get_result::<User>(conn)
}

pub(crate) fn list_items(conn: &PgConnection, skip: i64, limit: i64) -> QueryResult<Vec<Item>> {
    item_page(skip, limit).load::<Item>(conn)
}

pub(crate) fn list_items_for_owner(conn: &PgConnection, owner: i32) -> QueryResult<Vec<Item>> {
    items::table
        .filter(items::owner_id.eq(owner))
        .load::<Item>(conn)
}

pub(crate) fn create_item_for_user(
    conn: &PgConnection,
    item: &ItemIn,
    owner: i32,
) -> QueryResult<Item> {
    let new_item = NewItem {
        title: item.title.clone(),
        description: item.description.clone(),
        owner_id: owner,
    };

    diesel::insert_into(items::table)
        .values(&new_item)
        .get_result::<Item>(conn)
}

// Plain OFFSET/LIMIT in storage order; nothing sorts.
fn user_page(skip: i64, limit: i64) -> users::BoxedQuery<'static, Pg> {
    users::table.into_boxed().offset(skip).limit(limit)
}

fn item_page(skip: i64, limit: i64) -> items::BoxedQuery<'static, Pg> {
    items::table.into_boxed().offset(skip).limit(limit)
}
