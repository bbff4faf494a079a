use crate::schema::items;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Debug)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

#[derive(Insertable)]
#[table_name = "items"]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

#[derive(Deserialize)]
pub struct ItemIn {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ItemOut {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

impl From<Item> for ItemOut {
    fn from(item: Item) -> ItemOut {
        ItemOut {
            id: item.id,
            title: item.title,
            description: item.description,
            owner_id: item.owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_out_copies_every_stored_field() {
        let out = ItemOut::from(Item {
            id: 3,
            title: "Plunger".to_string(),
            description: Some("Needed at once".to_string()),
            owner_id: 9,
        });

        assert_eq!(out.id, 3);
        assert_eq!(out.title, "Plunger");
        assert_eq!(out.description.as_deref(), Some("Needed at once"));
        assert_eq!(out.owner_id, 9);
    }

    #[test]
    fn missing_description_stays_null_on_the_way_out() {
        let out = ItemOut::from(Item {
            id: 1,
            title: "Rock".to_string(),
            description: None,
            owner_id: 2,
        });

        let body = serde_json::to_value(&out).unwrap();
        assert!(body["description"].is_null());
    }
}
