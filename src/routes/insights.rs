use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::insights::{InsightsTab, InsightsTable};
use crate::dto::table::TableQuery;
use crate::repository::SampleRepository;
use crate::routes::{base_context, insert_table, load_table_state, render_template, store_table_state};
use crate::services::insights as insights_service;

#[get("/insights")]
pub async fn show_insights(
    query: web::Query<TableQuery>,
    session: Session,
    repo: web::Data<SampleRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let tab = InsightsTab::parse(query.tab.as_deref());
    let entity = tab.entity();
    let mut state = load_table_state(&session, entity);

    match insights_service::load_insights(repo.get_ref(), tab, &mut state, &query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "insights");
            context.insert("tab", &data.tab);
            context.insert("stats", &data.stats);
            match &data.table {
                InsightsTable::Bookmarks(outcome) => {
                    store_table_state(&session, entity, &state, outcome);
                    insert_table(&mut context, entity, outcome);
                }
                InsightsTable::Follows(outcome) => {
                    store_table_state(&session, entity, &state, outcome);
                    insert_table(&mut context, entity, outcome);
                }
            }

            render_template(&tera, "insights/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load insights: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
