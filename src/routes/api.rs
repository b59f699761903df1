//! Stateless JSON views of the tables and charts.

use actix_web::{HttpResponse, Responder, get, web};
use serde_json::{Value, json};

use crate::dto::insights::{InsightsTab, InsightsTable};
use crate::dto::main::ChartQuery;
use crate::dto::music::{MusicTab, MusicTable};
use crate::dto::table::TableQuery;
use crate::repository::SampleRepository;
use crate::services::{
    ServiceError, ServiceResult, insights as insights_service, main as main_service,
    messages as messages_service, music as music_service, posts as posts_service,
    reports as reports_service, users as users_service,
};
use crate::table::TableState;

fn table_json(
    repo: &SampleRepository,
    page: &str,
    query: &TableQuery,
) -> ServiceResult<Option<Value>> {
    let mut state = TableState::default();

    let value = match page {
        "users" => json!({ "table": users_service::load_users(repo, &mut state, query)?.page }),
        "posts" => json!({ "table": posts_service::load_posts(repo, &mut state, query)?.page }),
        "reports" => {
            json!({ "table": reports_service::load_reports(repo, &mut state, query)?.page })
        }
        "messages" => {
            let data = messages_service::load_messages(repo, &mut state, query)?;
            json!({ "stats": data.stats, "table": data.table.page })
        }
        "music" => {
            let tab = MusicTab::parse(query.tab.as_deref());
            match music_service::load_music(repo, tab, &mut state, query)?.table {
                MusicTable::Tracks(outcome) => json!({ "tab": tab, "table": outcome.page }),
                MusicTable::Categories(outcome) => json!({ "tab": tab, "table": outcome.page }),
            }
        }
        "insights" => {
            let tab = InsightsTab::parse(query.tab.as_deref());
            let data = insights_service::load_insights(repo, tab, &mut state, query)?;
            match data.table {
                InsightsTable::Bookmarks(outcome) => {
                    json!({ "tab": tab, "stats": data.stats, "table": outcome.page })
                }
                InsightsTable::Follows(outcome) => {
                    json!({ "tab": tab, "stats": data.stats, "table": outcome.page })
                }
            }
        }
        _ => return Ok(None),
    };

    Ok(Some(value))
}

#[get("/v1/charts/{key}")]
pub async fn api_v1_chart(
    key: web::Path<String>,
    query: web::Query<ChartQuery>,
    repo: web::Data<SampleRepository>,
) -> impl Responder {
    match main_service::load_chart(repo.get_ref(), &key, query.range.as_deref()) {
        Ok(chart) => HttpResponse::Ok().json(chart),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::TypeConstraint(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to load chart {key}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/{page}")]
pub async fn api_v1_table(
    page: web::Path<String>,
    query: web::Query<TableQuery>,
    repo: web::Data<SampleRepository>,
) -> impl Responder {
    match table_json(repo.get_ref(), &page, &query) {
        Ok(Some(value)) => HttpResponse::Ok().json(value),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load {page} table: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
