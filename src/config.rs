use std::{env, str::FromStr, sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{error::CodeRunnerError, session::Session, submit::Judge0Client};

pub const DEFAULT_ENDPOINT: &str = "https://garland.mohitsasane.tech/1vs1/api/code/submitCode";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(1500);

/// What a failed submission turns into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Pretend the run succeeded with a canned result.
    #[default]
    Simulate,
    /// Report the failure as an execution error.
    Surface,
}

impl FromStr for FailurePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulate" => Ok(FailurePolicy::Simulate),
            "surface" => Ok(FailurePolicy::Surface),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub judge0_endpoint: String,
    pub bind_addr: String,
    pub fallback_delay: Duration,
    pub failure_policy: FailurePolicy,
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            judge0_endpoint: DEFAULT_ENDPOINT.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            failure_policy: FailurePolicy::default(),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Reads the process environment. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, CodeRunnerError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CodeRunnerError> {
        let mut conf = Config::default();
        if let Some(endpoint) = lookup("JUDGE0_ENDPOINT") {
            conf.judge0_endpoint = endpoint;
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            conf.bind_addr = addr;
        }
        if let Some(ms) = parse(&lookup, "FALLBACK_DELAY_MS")? {
            conf.fallback_delay = Duration::from_millis(ms);
        }
        if let Some(policy) = parse(&lookup, "FAILURE_POLICY")? {
            conf.failure_policy = policy;
        }
        conf.request_timeout = parse(&lookup, "REQUEST_TIMEOUT_MS")?.map(Duration::from_millis);
        Ok(conf)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, CodeRunnerError> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| CodeRunnerError::InvalidConfig { name, value })
        })
        .transpose()
}

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub client: Judge0Client,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(conf: &Config) -> Result<Self, CodeRunnerError> {
        Ok(AppState {
            client: Judge0Client::new(conf)?,
            session: Arc::new(Mutex::new(Session::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let conf = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(conf.judge0_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(conf.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(conf.fallback_delay, Duration::from_millis(1500));
        assert_eq!(conf.failure_policy, FailurePolicy::Simulate);
        assert_eq!(conf.request_timeout, None);
    }

    #[test]
    fn test_overrides() {
        let conf = Config::from_lookup(lookup(&[
            ("JUDGE0_ENDPOINT", "http://localhost:2358/submissions?wait=true"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("FALLBACK_DELAY_MS", "10"),
            ("FAILURE_POLICY", "Surface"),
            ("REQUEST_TIMEOUT_MS", "5000"),
        ]))
        .unwrap();
        assert_eq!(conf.judge0_endpoint, "http://localhost:2358/submissions?wait=true");
        assert_eq!(conf.bind_addr, "127.0.0.1:8080");
        assert_eq!(conf.fallback_delay, Duration::from_millis(10));
        assert_eq!(conf.failure_policy, FailurePolicy::Surface);
        assert_eq!(conf.request_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_malformed_values() {
        match Config::from_lookup(lookup(&[("FALLBACK_DELAY_MS", "soon")])) {
            Err(CodeRunnerError::InvalidConfig { name, value }) => {
                assert_eq!(name, "FALLBACK_DELAY_MS");
                assert_eq!(value, "soon");
            }
            _ => unreachable!(),
        }
        assert!(Config::from_lookup(lookup(&[("FAILURE_POLICY", "ignore")])).is_err());
    }
}
