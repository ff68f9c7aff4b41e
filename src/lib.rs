mod config;
mod error;
mod languages;
mod models;
mod render;
mod routes;
mod session;
mod submit;

pub use config::{AppState, Config, FailurePolicy};
pub use error::CodeRunnerError;
pub use languages::{Language, LANGUAGES};
pub use models::status::{classify, status_name, StatusClass};
pub use models::submission::{ExecutionResult, Status, SubmissionRequest};
pub use render::{OutputPanel, ResultView, Section, SessionView};
pub use routes::router;
pub use session::{RunTicket, Session};
pub use submit::{Judge0Client, RunOutcome};
