use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::action::EntityKind;
use crate::dto::table::TableQuery;
use crate::repository::SampleRepository;
use crate::routes::{base_context, insert_table, load_table_state, render_template, store_table_state};
use crate::services::posts as posts_service;

#[get("/posts")]
pub async fn show_posts(
    query: web::Query<TableQuery>,
    session: Session,
    repo: web::Data<SampleRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut state = load_table_state(&session, EntityKind::Posts);

    match posts_service::load_posts(repo.get_ref(), &mut state, &query) {
        Ok(outcome) => {
            store_table_state(&session, EntityKind::Posts, &state, &outcome);

            let mut context = base_context(&flash_messages, "posts");
            insert_table(&mut context, EntityKind::Posts, &outcome);

            render_template(&tera, "posts/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load posts: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
