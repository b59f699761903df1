use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::domain::action::EntityKind;
use crate::repository::SampleRepository;
use crate::routes::redirect;
use crate::services::{ServiceError, actions as actions_service};

fn listing_path(entity: &str) -> &'static str {
    entity
        .parse::<EntityKind>()
        .map(EntityKind::listing_path)
        .unwrap_or("/")
}

#[post("/{entity}/bulk")]
pub async fn bulk_action(
    entity: web::Path<String>,
    repo: web::Data<SampleRepository>,
    form: web::Bytes,
) -> impl Responder {
    let entity = entity.into_inner();
    let Ok(kind) = entity.parse::<EntityKind>() else {
        FlashMessage::error(format!("Unknown section: {entity}")).send();
        return redirect("/");
    };

    match actions_service::dispatch_bulk_action(repo.get_ref(), kind, form.as_ref()) {
        Ok(count) => {
            FlashMessage::success(format!("Action applied to {count} rows.")).send();
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("No rows were changed: one of the selected rows no longer exists.")
                .send();
        }
        Err(err) => {
            log::error!("Failed to apply bulk action: {err}");
            FlashMessage::error("Failed to apply the action.").send();
        }
    }
    redirect(kind.listing_path())
}

#[post("/{entity}/{id}/{action}")]
pub async fn row_action(
    path: web::Path<(String, i32, String)>,
    repo: web::Data<SampleRepository>,
) -> impl Responder {
    let (entity, id, action) = path.into_inner();

    match actions_service::dispatch_action(repo.get_ref(), &entity, id, &action) {
        Ok(row_action) => {
            FlashMessage::success(format!("Requested {row_action}.")).send();
        }
        Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("{entity} #{id} not found.")).send();
        }
        Err(err) => {
            log::error!("Failed to dispatch {action} on {entity} #{id}: {err}");
            FlashMessage::error("Failed to apply the action.").send();
        }
    }
    redirect(listing_path(&entity))
}
