use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::action::EntityKind;
use crate::dto::table::TableQuery;
use crate::repository::SampleRepository;
use crate::routes::{base_context, insert_table, load_table_state, render_template, store_table_state};
use crate::services::users as users_service;

#[get("/users")]
pub async fn show_users(
    query: web::Query<TableQuery>,
    session: Session,
    repo: web::Data<SampleRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut state = load_table_state(&session, EntityKind::Users);

    match users_service::load_users(repo.get_ref(), &mut state, &query) {
        Ok(outcome) => {
            store_table_state(&session, EntityKind::Users, &state, &outcome);

            let mut context = base_context(&flash_messages, "users");
            insert_table(&mut context, EntityKind::Users, &outcome);

            render_template(&tera, "users/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load users: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
