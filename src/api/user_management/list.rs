use crate::api::user_management::models::UserOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/users?<skip>&<limit>")]
pub(crate) async fn list_users(
    skip: Option<i64>,
    limit: Option<i64>,
    conn: DbConn,
) -> Result<Json<Vec<UserOut>>, ErrorResponse> {
    let skip = skip.unwrap_or(0);
    let limit = limit.unwrap_or(100);

    conn.run(move |c| {
        let users = store::list_users(c, skip, limit).map_err(|_| {
            ErrorResponse::new(
                Status { code: 500 },
                "Couldn't load users from database".to_string(),
            )
        })?;

        // one item query per listed user
        let out = users
            .into_iter()
            .map(|user| {
                let items = store::list_items_for_owner(c, user.id).map_err(|_| {
                    ErrorResponse::new(Status { code: 500 }, "Couldn't load items".to_string())
                })?;

                Ok(UserOut::from_record(user, items))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Json(out))
    })
    .await
}
