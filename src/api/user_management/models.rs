use crate::api::item_management::models::{Item, ItemOut};
use crate::schema::users;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Debug)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub email: String,
    pub hashed_password: String,
}

#[derive(Deserialize)]
pub struct UserIn {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct UserOut {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub items: Vec<ItemOut>,
}

impl UserOut {
    /// Builds the response shape from a stored user and its stored items.
    /// `hashed_password` never leaves the persistence layer.
    pub(crate) fn from_record(user: User, items: Vec<Item>) -> UserOut {
        UserOut {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            items: items.into_iter().map(ItemOut::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> User {
        User {
            id: 11,
            email: "ada@example.com".to_string(),
            hashed_password: "plaintext".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn from_record_copies_user_fields_and_items() {
        let items = vec![Item {
            id: 1,
            title: "Notebook".to_string(),
            description: None,
            owner_id: 11,
        }];

        let out = UserOut::from_record(stored_user(), items);

        assert_eq!(out.id, 11);
        assert_eq!(out.email, "ada@example.com");
        assert!(out.is_active);
        assert_eq!(out.items.len(), 1);
        assert_eq!(out.items[0].owner_id, 11);
    }

    #[test]
    fn fresh_user_serializes_with_empty_items() {
        let out = UserOut::from_record(stored_user(), Vec::new());
        let body = serde_json::to_value(&out).unwrap();

        assert_eq!(body["items"], serde_json::json!([]));
    }

    #[test]
    fn password_is_not_part_of_the_response_shape() {
        let out = UserOut::from_record(stored_user(), Vec::new());
        let body = serde_json::to_value(&out).unwrap();

        assert!(body.get("hashed_password").is_none());
        assert!(body.get("password").is_none());
    }
}
