#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;
    tracing::info!(services = config.endpoints.len(), timeout = ?config.upstream_timeout, "upstreams resolved");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "hourly listening");
    axum::serve(listener, app).await.expect("server failed");
}
