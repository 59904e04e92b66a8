use actix_web::web::Data;
use actix_web::{get, Responder};
use sea_orm::DatabaseConnection;

use crate::entities::users::Model;
use crate::responses::{home, Page};
use crate::session::SessionContext;

/// Homepage. Greets the logged-in user when the session carries one.
#[get("/")]
pub async fn index(ctx: SessionContext, db: Data<DatabaseConnection>) -> impl Responder {
    let user = match ctx.user_id() {
        Some(id) => Model::find_by_id(&db, id).await.map(|user| user.username),
        None => None,
    };

    Page::new("Home")
        .user(user.clone())
        .flashes(ctx.take_flashes())
        .content(home::index(user.as_deref()))
}
