use mock_server::{MockState, Stub};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // STUBS points at a JSON array of stubs to preload.
    let state = match std::env::var("STUBS") {
        Ok(path) => {
            let stubs: Vec<Stub> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            info!(%path, count = stubs.len(), "loaded stubs");
            MockState::with_stubs(stubs)
        }
        Err(_) => MockState::new(),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    mock_server::run_with_state(listener, state).await?;
    Ok(())
}
