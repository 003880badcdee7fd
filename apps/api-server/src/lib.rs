//! # Blog Posts API Server
//!
//! Actix-web service exposing the `/posts` resource.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use actix_web::web;

use state::AppState;

/// Mount state and routes onto an app: `App::new().configure(configure_app(state))`.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state));
        handlers::configure_routes(cfg);
    }
}
