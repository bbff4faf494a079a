use crate::api::user_management::models::{UserIn, UserOut};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::http::Status;
use rocket::serde::json::Json;

#[post("/users", data = "<user>")]
pub(crate) async fn create_user(
    user: Json<UserIn>,
    conn: DbConn,
) -> Result<Json<UserOut>, ErrorResponse> {
    let user = user.into_inner();

    conn.run(move |c| {
        let existing = store::get_user_by_email(c, &user.email).map_err(|_| {
            ErrorResponse::new(
                Status { code: 500 },
                "Couldn't load user from database".to_string(),
            )
        })?;

        if existing.is_some() {
            return Err(ErrorResponse::new(
                Status { code: 400 },
                "Email already registered".to_string(),
            ));
        }

        let created = store::create_user(c, &user).map_err(|err| {
            ErrorResponse::new(
                Status { code: 500 },
                format!("Couldn't create user: {}", err),
            )
        })?;

        // a user fresh out of the insert owns no items
        Ok(Json(UserOut::from_record(created, Vec::new())))
    })
    .await
}
