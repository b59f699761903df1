use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::action::EntityKind;
use crate::dto::table::TableQuery;
use crate::repository::SampleRepository;
use crate::routes::{base_context, insert_table, load_table_state, render_template, store_table_state};
use crate::services::reports as reports_service;

#[get("/reports")]
pub async fn show_reports(
    query: web::Query<TableQuery>,
    session: Session,
    repo: web::Data<SampleRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut state = load_table_state(&session, EntityKind::Reports);

    match reports_service::load_reports(repo.get_ref(), &mut state, &query) {
        Ok(outcome) => {
            store_table_state(&session, EntityKind::Reports, &state, &outcome);

            let mut context = base_context(&flash_messages, "reports");
            insert_table(&mut context, EntityKind::Reports, &outcome);

            render_template(&tera, "reports/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load reports: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
