use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::action::EntityKind;
use crate::dto::table::TableQuery;
use crate::repository::SampleRepository;
use crate::routes::{base_context, insert_table, load_table_state, render_template, store_table_state};
use crate::services::messages as messages_service;

#[get("/messages")]
pub async fn show_messages(
    query: web::Query<TableQuery>,
    session: Session,
    repo: web::Data<SampleRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut state = load_table_state(&session, EntityKind::Messages);

    match messages_service::load_messages(repo.get_ref(), &mut state, &query) {
        Ok(data) => {
            store_table_state(&session, EntityKind::Messages, &state, &data.table);

            let mut context = base_context(&flash_messages, "messages");
            context.insert("stats", &data.stats);
            insert_table(&mut context, EntityKind::Messages, &data.table);

            render_template(&tera, "messages/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load messages: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
