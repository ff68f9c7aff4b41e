use axum::{extract::State, Json};
use serde::Deserialize;

use crate::config::AppState;
use crate::error::CodeRunnerError;
use crate::render::SessionView;

#[derive(Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub stdin: String,
}

/// Runs the editor contents. The session lock is released while the
/// execution service is working so the page stays responsive. Submission and
/// completion run in their own task, so a client hanging up mid-run still
/// leaves the session finished.
pub async fn run(
    State(state): State<AppState>,
    Json(RunRequest { stdin }): Json<RunRequest>,
) -> Result<Json<SessionView>, CodeRunnerError> {
    let ticket = state
        .session
        .lock()
        .await
        .begin_run(stdin)
        .inspect_err(|e| tracing::warn!("{e}"))?;
    let view = tokio::spawn(async move {
        let outcome = state.client.submit(&ticket.request).await;
        let mut session = state.session.lock().await;
        session.complete(&ticket, outcome);
        SessionView::new(&session)
    })
    .await
    .inspect_err(|e| tracing::error!("{e}"))?;
    Ok(Json(view))
}
