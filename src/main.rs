mod api;
mod db;
mod error;
mod schema;
mod settings;
mod store;


#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel;
extern crate dotenv;
#[macro_use]
extern crate diesel_migrations;

use rocket::fairing::AdHoc;
use settings::Settings;

#[get("/")]
fn index() -> &'static str {
    "Hello, world!"
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();

    let settings = Settings::new();
    let figment = rocket::Config::figment()
        .merge(("databases.user_items.url", settings.database_url));

    rocket::custom(figment)
        .attach(db::DbConn::fairing())
        .attach(AdHoc::on_ignite("Database migrations", db::run_db_migrations))
        .mount(
            "/",
            routes![
                index,
                crate::api::user_management::create::create_user,
                crate::api::user_management::list::list_users,
                crate::api::user_management::get_user::get_user,
                crate::api::item_management::create::create_item,
                crate::api::item_management::list::list_items,
            ],
        )
}
