/// Route configuration for the Encantia service
use actix_web::{web, HttpResponse};

use crate::handlers;
use crate::openapi::openapi_json;

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home::home))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .route("/openapi.json", web::get().to(openapi_json))
                .route("/auth/login", web::post().to(handlers::auth::login))
                .route("/auth/logout", web::post().to(handlers::auth::logout))
                .route("/auth/session", web::get().to(handlers::auth::session))
                .route("/profile", web::put().to(handlers::profiles::save_profile))
                .route(
                    "/profiles/description",
                    web::put().to(handlers::profiles::update_description),
                )
                .route(
                    "/profiles/{user_id}",
                    web::get().to(handlers::profiles::profile_view),
                )
                .route(
                    "/profiles/{user_id}/follow",
                    web::post().to(handlers::profiles::follow),
                )
                .route("/users", web::get().to(handlers::profiles::users))
                .route("/notes", web::get().to(handlers::notes::notes))
                .route("/inbox", web::get().to(handlers::inbox::inbox))
                .route("/warnings", web::get().to(handlers::warnings::warnings))
                .route("/events", web::get().to(handlers::events::events))
                .route("/projects", web::get().to(handlers::projects::list))
                .route("/projects", web::post().to(handlers::projects::create))
                .route(
                    "/projects/{id}",
                    web::delete().to(handlers::projects::remove),
                )
                .route("/books", web::get().to(handlers::books::catalog))
                .route("/books/{id}", web::get().to(handlers::books::detail))
                .route("/games", web::get().to(handlers::games::games)),
        );
}
