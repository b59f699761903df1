use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::main::ChartQuery;
use crate::repository::SampleRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, main as main_service};

#[get("/")]
pub async fn show_index(
    repo: web::Data<SampleRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_dashboard(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("stats", &data.stats);
            context.insert("charts", &data.charts);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/charts/{key}/export.csv")]
pub async fn export_chart(
    key: web::Path<String>,
    query: web::Query<ChartQuery>,
    repo: web::Data<SampleRepository>,
) -> impl Responder {
    match main_service::export_chart_csv(repo.get_ref(), &key, query.range.as_deref()) {
        Ok(export) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(export.file_name)],
            })
            .body(export.content),
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("Chart {key} not found.")).send();
            redirect("/")
        }
        Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to export chart {key}: {err}");
            FlashMessage::error("Failed to export the chart.").send();
            redirect("/")
        }
    }
}
