use axum::{extract::State, Json};
use serde::Deserialize;

use crate::config::AppState;
use crate::error::CodeRunnerError;
use crate::languages::{Language, LANGUAGES};
use crate::render::SessionView;

#[derive(Deserialize)]
pub struct LanguageChoice {
    pub id: u16,
}

#[derive(Deserialize)]
pub struct CodeEdit {
    pub code: String,
}

pub async fn languages() -> Json<&'static [Language]> {
    Json(LANGUAGES.as_slice())
}

pub async fn show(State(state): State<AppState>) -> Json<SessionView> {
    Json(SessionView::new(&*state.session.lock().await))
}

pub async fn reset(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.reset();
    Json(SessionView::new(&session))
}

pub async fn select_language(
    State(state): State<AppState>,
    Json(choice): Json<LanguageChoice>,
) -> Result<Json<SessionView>, CodeRunnerError> {
    let mut session = state.session.lock().await;
    session
        .select_language(choice.id)
        .inspect_err(|e| tracing::warn!("{e}"))?;
    Ok(Json(SessionView::new(&session)))
}

pub async fn set_code(
    State(state): State<AppState>,
    Json(edit): Json<CodeEdit>,
) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.set_code(edit.code);
    Json(SessionView::new(&session))
}
