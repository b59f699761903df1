#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::SampleRepository;

pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
pub mod table;

/// Registers every page, action and API handler.
///
/// Literal routes are registered before the catch-all `/{entity}/...`
/// action routes.
#[cfg(feature = "server")]
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    use crate::routes::actions::{bulk_action, row_action};
    use crate::routes::api::{api_v1_chart, api_v1_table};
    use crate::routes::insights::show_insights;
    use crate::routes::main::{export_chart, show_index};
    use crate::routes::messages::show_messages;
    use crate::routes::music::{add_category, add_track, show_music};
    use crate::routes::posts::show_posts;
    use crate::routes::reports::show_reports;
    use crate::routes::users::show_users;

    cfg.service(
        web::scope("/api")
            .service(api_v1_chart)
            .service(api_v1_table),
    )
    .service(show_index)
    .service(export_chart)
    .service(show_users)
    .service(show_posts)
    .service(show_reports)
    .service(show_messages)
    .service(show_music)
    .service(add_track)
    .service(add_category)
    .service(show_insights)
    .service(bulk_action)
    .service(row_action);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = SampleRepository::new()
        .map_err(|e| std::io::Error::other(format!("Failed to build sample data: {e}")))?;

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(configure_routes)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
