use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body POSTed to the execution service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub language_id: u16,
    pub source_code: String,
    pub stdin: String,
}

impl SubmissionRequest {
    pub fn new(language_id: u16, source_code: impl Into<String>) -> Self {
        SubmissionRequest {
            language_id,
            source_code: source_code.into(),
            stdin: String::new(),
        }
    }

    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = stdin.into();
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub id: i64,
    pub description: String,
}

/// What the execution service reports for one submission. Fields are kept as
/// received; `time` and `memory` are `null` while the service is still busy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: Status,
    pub time: Option<String>,
    pub memory: Option<i64>,
    /// Anything else the service sent along, e.g. a submission token.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExecutionResult {
    /// Canned result reported when the service cannot be reached.
    pub fn simulated() -> Self {
        ExecutionResult {
            stdout: Some("Hello, World!\n".to_string()),
            stderr: None,
            compile_output: None,
            message: None,
            status: Status {
                id: 3,
                description: "Accepted".to_string(),
            },
            time: Some("0.001".to_string()),
            memory: Some(1024),
            extra: Map::new(),
        }
    }
}
