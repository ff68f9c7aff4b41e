use std::time::Duration;

use crate::config::{Config, FailurePolicy};
use crate::error::CodeRunnerError;
use crate::models::submission::{ExecutionResult, SubmissionRequest};

/// How a single run concluded.
#[derive(Debug)]
pub enum RunOutcome {
    Succeeded(ExecutionResult),
    /// The service could not be used; the result is the canned one.
    FallbackSimulated(ExecutionResult),
    /// Only produced under [`FailurePolicy::Surface`].
    Failed(CodeRunnerError),
}

/// Client for a Judge0-style execution service that answers a submission
/// synchronously with its result.
#[derive(Clone, Debug)]
pub struct Judge0Client {
    client: reqwest::Client,
    endpoint: String,
    fallback_delay: Duration,
    failure_policy: FailurePolicy,
}

impl Judge0Client {
    pub fn new(conf: &Config) -> Result<Self, CodeRunnerError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = conf.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Judge0Client {
            client: builder.build()?,
            endpoint: conf.judge0_endpoint.clone(),
            fallback_delay: conf.fallback_delay,
            failure_policy: conf.failure_policy,
        })
    }

    /// Submits the program and never fails outright: transport, status and
    /// decoding errors are all handled according to the failure policy.
    #[tracing::instrument(name = "submit", skip(self, request), fields(language_id = request.language_id))]
    pub async fn submit(&self, request: &SubmissionRequest) -> RunOutcome {
        match self.execute(request).await {
            Ok(result) => {
                tracing::info!(status = result.status.id, "execution finished");
                RunOutcome::Succeeded(result)
            }
            Err(err) => match self.failure_policy {
                FailurePolicy::Simulate => {
                    tracing::warn!("{err}; simulating result");
                    tokio::time::sleep(self.fallback_delay).await;
                    RunOutcome::FallbackSimulated(ExecutionResult::simulated())
                }
                FailurePolicy::Surface => {
                    tracing::error!("{err}");
                    RunOutcome::Failed(err)
                }
            },
        }
    }

    /// One POST to the service, with every failure reported as an error.
    pub async fn execute(
        &self,
        request: &SubmissionRequest,
    ) -> Result<ExecutionResult, CodeRunnerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CodeRunnerError::HttpStatus(response.status()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
