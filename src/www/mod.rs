//! # Web Server Implementation
//!
//! Routes and handlers for the dashboard server. The binary in
//! `src/bin/www.rs` builds the shared state (dataset and template engine)
//! and mounts [`configure`] on an actix-web `App`.
//!
//! ## Submodules
//! - `handlers`: the page handler, the JSON callback handlers and the
//!   template helpers they share.

/// Request handlers for the page and its callbacks.
pub mod handlers;

use actix_web::web;
use handlers::api;

/// Where the page posts control events.
pub const DISPATCH_PATH: &str = "/api/dispatch";

/// Registers every route and the JSON/query error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json = web::JsonConfig::default().error_handler(api::json_error);
    let query = web::QueryConfig::default().error_handler(api::query_error);
    cfg.app_data(json)
        .app_data(query)
        .route("/", web::get().to(handlers::index))
        .route(DISPATCH_PATH, web::post().to(api::post_dispatch))
        .route("/api/figure", web::get().to(api::get_figure))
        .route("/api/wins", web::get().to(api::get_wins));
}
