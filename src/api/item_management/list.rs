use crate::api::item_management::models::ItemOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/items?<skip>&<limit>")]
pub(crate) async fn list_items(
    skip: Option<i64>,
    limit: Option<i64>,
    conn: DbConn,
) -> Result<Json<Vec<ItemOut>>, ErrorResponse> {
    let skip = skip.unwrap_or(0);
    let limit = limit.unwrap_or(100);

    conn.run(move |c| {
        let items = store::list_items(c, skip, limit).map_err(|_| {
            ErrorResponse::new(Status { code: 500 }, "Couldn't load items".to_string())
        })?;

        Ok(Json(items.into_iter().map(ItemOut::from).collect::<Vec<_>>()))
    })
    .await
}
