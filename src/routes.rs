use axum::{http::StatusCode, routing, Router};

use crate::config::AppState;

mod page;
mod run;
mod session;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", routing::get(page::index))
        .route("/api/languages", routing::get(session::languages))
        .route("/api/session", routing::get(session::show))
        .route("/api/session/reset", routing::post(session::reset))
        .route("/api/language", routing::put(session::select_language))
        .route("/api/code", routing::put(session::set_code))
        .route("/api/run", routing::post(run::run))
        .with_state(state)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
}
