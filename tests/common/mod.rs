#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use coderunner::{Config, FailurePolicy};
use serde_json::Value;
use tokio::{net::TcpListener, sync::Mutex};

/// What the mock execution service saw: content type and body per request.
pub type Seen = Arc<Mutex<Vec<(String, Value)>>>;

#[derive(Clone)]
pub struct Judge {
    pub seen: Seen,
    pub status: StatusCode,
    pub reply: String,
    pub delay: Duration,
}

impl Judge {
    pub fn replying(reply: Value) -> Self {
        Judge {
            seen: Seen::default(),
            status: StatusCode::OK,
            reply: reply.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Judge {
            status,
            reply: "{}".to_string(),
            ..Judge::replying(Value::Null)
        }
    }

    /// Serves the mock and returns its submission URL.
    pub async fn spawn(self) -> String {
        let app = Router::new()
            .route("/submitCode", routing::post(judge))
            .with_state(self);
        format!("{}/submitCode", serve(app).await)
    }
}

async fn judge(State(judge): State<Judge>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    judge.seen.lock().await.push((content_type, body));
    tokio::time::sleep(judge.delay).await;
    (
        judge.status,
        [("content-type", "application/json")],
        judge.reply.clone(),
    )
        .into_response()
}

pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

/// A URL nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/submitCode")
}

pub fn config(endpoint: String, policy: FailurePolicy) -> Config {
    Config {
        judge0_endpoint: endpoint,
        fallback_delay: Duration::from_millis(20),
        failure_policy: policy,
        ..Config::default()
    }
}
