use crate::api::user_management::models::UserOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/users/<user_id>")]
pub(crate) async fn get_user(
    user_id: i32,
    conn: DbConn,
) -> Result<Json<UserOut>, ErrorResponse> {
    conn.run(move |c| {
        let user = store::get_user(c, user_id)
            .map_err(|_| {
                ErrorResponse::new(
                    Status { code: 500 },
                    "Couldn't load user from database".to_string(),
                )
            })?
            .ok_or_else(|| {
                ErrorResponse::new(Status { code: 404 }, "User not found".to_string())
            })?;

        let items = store::list_items_for_owner(c, user.id).map_err(|_| {
            ErrorResponse::new(Status { code: 500 }, "Couldn't load items".to_string())
        })?;

        Ok(Json(UserOut::from_record(user, items)))
    })
    .await
}
