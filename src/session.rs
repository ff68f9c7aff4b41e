use crate::error::CodeRunnerError;
use crate::languages::Language;
use crate::models::submission::{ExecutionResult, SubmissionRequest};
use crate::submit::RunOutcome;

/// Editor state for one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    language: &'static Language,
    code: String,
    executing: bool,
    result: Option<ExecutionResult>,
    error: Option<String>,
    generation: u64,
}

/// Handed out when a run starts; completing with an outdated ticket is a no-op.
#[derive(Debug, Clone)]
pub struct RunTicket {
    generation: u64,
    pub request: SubmissionRequest,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let language = Language::initial();
        Session {
            language,
            code: language.default_code.to_string(),
            executing: false,
            result: None,
            error: None,
            generation: 0,
        }
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    pub fn result(&self) -> Option<&ExecutionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Back to the page-load state. Runs begun before the reset stay stale.
    pub fn reset(&mut self) {
        *self = Session {
            generation: self.generation + 1,
            ..Session::new()
        };
    }

    /// Switches language and resets the editor to its snippet. Any run still
    /// in flight is abandoned.
    pub fn select_language(&mut self, id: u16) -> Result<(), CodeRunnerError> {
        let language = Language::find(id)?;
        self.language = language;
        self.code = language.default_code.to_string();
        self.result = None;
        self.error = None;
        self.executing = false;
        self.generation += 1;
        Ok(())
    }

    pub fn begin_run(&mut self, stdin: impl Into<String>) -> Result<RunTicket, CodeRunnerError> {
        if self.executing {
            return Err(CodeRunnerError::RunInProgress);
        }
        self.generation += 1;
        self.executing = true;
        self.result = None;
        self.error = None;
        Ok(RunTicket {
            generation: self.generation,
            request: SubmissionRequest::new(self.language.id, self.code.clone()).with_stdin(stdin),
        })
    }

    /// Stores the outcome of a run. Returns `false` when the ticket was
    /// superseded and the outcome was dropped.
    pub fn complete(&mut self, ticket: &RunTicket, outcome: RunOutcome) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale run"
            );
            return false;
        }
        self.executing = false;
        match outcome {
            RunOutcome::Succeeded(result) | RunOutcome::FallbackSimulated(result) => {
                self.result = Some(result);
            }
            RunOutcome::Failed(err) => self.error = Some(err.to_string()),
        }
        true
    }
}
