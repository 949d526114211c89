//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::list))
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create))
                .route("/{id}", web::get().to(posts::show))
                .route("/{id}", web::post().to(posts::update))
                .route("/{id}/delete", web::post().to(posts::delete)),
        )
        .route("/api/health", web::get().to(health::health_check));
}
