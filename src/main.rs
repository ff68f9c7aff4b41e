use coderunner::{router, AppState, CodeRunnerError, Config};

#[tokio::main]
async fn main() -> Result<(), CodeRunnerError> {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();
    let conf = Config::from_env().inspect_err(|e| tracing::error!("{e}"))?;
    let listener = tokio::net::TcpListener::bind(&conf.bind_addr).await?;
    tracing::info!(
        addr = %conf.bind_addr,
        endpoint = %conf.judge0_endpoint,
        policy = ?conf.failure_policy,
        "serving CodeRunner"
    );
    axum::serve(listener, router(AppState::new(&conf)?)).await?;
    Ok(())
}
