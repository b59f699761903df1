use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::music::{MusicTab, MusicTable};
use crate::dto::table::TableQuery;
use crate::forms::music::{AddCategoryForm, AddTrackForm};
use crate::repository::SampleRepository;
use crate::routes::{
    base_context, insert_table, load_table_state, redirect, render_template, store_table_state,
};
use crate::services::{ServiceError, music as music_service};

#[get("/music")]
pub async fn show_music(
    query: web::Query<TableQuery>,
    session: Session,
    repo: web::Data<SampleRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let tab = MusicTab::parse(query.tab.as_deref());
    let entity = tab.entity();
    let mut state = load_table_state(&session, entity);

    match music_service::load_music(repo.get_ref(), tab, &mut state, &query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "music");
            context.insert("tab", &data.tab);
            match &data.table {
                MusicTable::Tracks(outcome) => {
                    store_table_state(&session, entity, &state, outcome);
                    insert_table(&mut context, entity, outcome);
                }
                MusicTable::Categories(outcome) => {
                    store_table_state(&session, entity, &state, outcome);
                    insert_table(&mut context, entity, outcome);
                }
            }

            render_template(&tera, "music/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load music: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/music/add")]
pub async fn add_track(
    repo: web::Data<SampleRepository>,
    web::Form(form): web::Form<AddTrackForm>,
) -> impl Responder {
    match music_service::add_track(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Track submitted.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a track: {err}");
            FlashMessage::error("Failed to add the track.").send();
        }
    }
    redirect("/music?tab=music")
}

#[post("/music/categories/add")]
pub async fn add_category(
    repo: web::Data<SampleRepository>,
    web::Form(form): web::Form<AddCategoryForm>,
) -> impl Responder {
    match music_service::add_category(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Category submitted.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a category: {err}");
            FlashMessage::error("Failed to add the category.").send();
        }
    }
    redirect("/music?tab=categories")
}
