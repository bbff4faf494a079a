use crate::api::item_management::models::{ItemIn, ItemOut};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::http::Status;
use rocket::serde::json::Json;

#[post("/users/<user_id>/items", data = "<item>")]
pub(crate) async fn create_item(
    user_id: i32,
    item: Json<ItemIn>,
    conn: DbConn,
) -> Result<Json<ItemOut>, ErrorResponse> {
    let item = item.into_inner();

    conn.run(move |c| {
        // advisory check; the owner_id foreign key is the hard backstop
        store::get_user(c, user_id)
            .map_err(|_| {
                ErrorResponse::new(
                    Status { code: 500 },
                    "Couldn't load user from database".to_string(),
                )
            })?
            .ok_or_else(|| {
                ErrorResponse::new(Status { code: 404 }, "User not found".to_string())
            })?;

        let created = store::create_item_for_user(c, &item, user_id).map_err(|err| {
            ErrorResponse::new(
                Status { code: 500 },
                format!("Couldn't create item: {}", err),
            )
        })?;

        Ok(Json(ItemOut::from(created)))
    })
    .await
}
