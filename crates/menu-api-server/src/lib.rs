//! # Menu API Server
//!
//! HTTP surface for the navigation menu service: configuration, Postgres
//! repository adapter, named route table, and axum handlers.

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub mod config;
pub mod database;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod utils;

pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .route(
            "/api/menus/{menu_name}",
            get(handlers::menu::render_menu_handler),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
