use std::fmt;

use serde::Serialize;

use crate::languages::Language;
use crate::models::status::{classify, status_name, StatusClass};
use crate::models::submission::ExecutionResult;
use crate::session::Session;

/// What the output panel shows for a session.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum OutputPanel {
    Executing,
    Result(ResultView),
    Error { message: String },
    Ready,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResultView {
    pub class: StatusClass,
    pub description: String,
    pub time: String,
    pub memory: String,
    pub sections: Vec<Section>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub body: String,
}

impl ResultView {
    pub fn new(result: &ExecutionResult) -> Self {
        let sections = [
            ("Output", &result.stdout),
            ("Error", &result.stderr),
            ("Compilation Output", &result.compile_output),
            ("Message", &result.message),
        ]
        .into_iter()
        .filter_map(|(title, body)| match body.as_deref() {
            Some(body) if !body.is_empty() => Some(Section {
                title,
                body: body.to_string(),
            }),
            _ => None,
        })
        .collect();
        let description = match status_name(result.status.id) {
            Some(name) if result.status.description.is_empty() => name.to_string(),
            _ => result.status.description.clone(),
        };
        ResultView {
            class: classify(result.status.id),
            description,
            time: result.time.clone().unwrap_or_default(),
            memory: result.memory.map(|m| m.to_string()).unwrap_or_default(),
            sections,
        }
    }
}

impl OutputPanel {
    pub fn new(session: &Session) -> Self {
        if session.is_executing() {
            OutputPanel::Executing
        } else if let Some(result) = session.result() {
            OutputPanel::Result(ResultView::new(result))
        } else if let Some(message) = session.error() {
            OutputPanel::Error {
                message: message.to_string(),
            }
        } else {
            OutputPanel::Ready
        }
    }
}

impl fmt::Display for OutputPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputPanel::Executing => write!(f, "Executing your code..."),
            OutputPanel::Result(view) => {
                let icon = match view.class {
                    StatusClass::Success => "✓",
                    StatusClass::Failure => "✗",
                    StatusClass::Pending => "…",
                };
                write!(
                    f,
                    "[{icon} {}] Time: {}s Memory: {} KB",
                    view.description, view.time, view.memory
                )?;
                for section in &view.sections {
                    write!(f, "\n\n{}:\n{}", section.title, section.body)?;
                }
                Ok(())
            }
            OutputPanel::Error { message } => write!(f, "Execution Error\n{message}"),
            OutputPanel::Ready => write!(f, "Ready to Execute\nClick \"Run Code\" to see the output here"),
        }
    }
}

/// Everything the page needs to draw itself.
#[derive(Serialize, Debug, Clone)]
pub struct SessionView {
    pub language: &'static Language,
    pub code: String,
    pub executing: bool,
    pub output: OutputPanel,
}

impl SessionView {
    pub fn new(session: &Session) -> Self {
        SessionView {
            language: session.language(),
            code: session.code().to_string(),
            executing: session.is_executing(),
            output: OutputPanel::new(session),
        }
    }
}
