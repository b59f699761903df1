//! HTTP handlers and the helpers they share.

use actix_session::Session;
use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::action::EntityKind;
use crate::dto::table::TableOutcome;
use crate::table::TableState;

pub mod actions;
pub mod api;
pub mod insights;
pub mod main;
pub mod messages;
pub mod music;
pub mod posts;
pub mod reports;
pub mod users;

/// Maps a flash-message level onto a Bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every page: pending alerts and the active navigation
/// entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn session_key(entity: EntityKind) -> String {
    format!("table.{}", entity.slug())
}

/// Table state remembered for `entity`, or the defaults.
pub fn load_table_state(session: &Session, entity: EntityKind) -> TableState {
    match session.get::<TableState>(&session_key(entity)) {
        Ok(state) => state.unwrap_or_default(),
        Err(err) => {
            log::warn!("Discarding unreadable {entity} table state: {err}");
            TableState::default()
        }
    }
}

/// Persists the table state when the request changed it.
pub fn store_table_state<T>(
    session: &Session,
    entity: EntityKind,
    state: &TableState,
    outcome: &TableOutcome<T>,
) {
    if !outcome.state_changed {
        return;
    }
    if let Err(err) = session.insert(session_key(entity), state) {
        log::error!("Failed to store {entity} table state: {err}");
    }
}

/// Inserts the table under `table` together with the entity slug its row
/// actions post to.
pub fn insert_table<T: Serialize>(
    context: &mut Context,
    entity: EntityKind,
    outcome: &TableOutcome<T>,
) {
    context.insert("table", &outcome.page);
    context.insert("entity", entity.slug());
    context.insert("row_actions", &entity.actions());
}
