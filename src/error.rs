use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeRunnerError {
    #[error("request to execution service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("execution service answered with HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("malformed execution result: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unknown language id {0}")]
    UnknownLanguage(u16),
    #[error("a run is already in progress")]
    RunInProgress,
    #[error("invalid value for {name}: {value}")]
    InvalidConfig { name: &'static str, value: String },
    #[error("run task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for CodeRunnerError {
    fn into_response(self) -> Response {
        let status = match self {
            CodeRunnerError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
            CodeRunnerError::RunInProgress => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
