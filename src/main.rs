mod config;
mod routes;
mod services;
mod state;
mod views;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");
    let addr = config.socket_addr();

    let users = services::users::UserStore::seeded();
    tracing::info!(users = users.len(), "user store seeded");

    let state = state::AppState::new(users, config);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "vulndemo listening");
    axum::serve(listener, app).await.expect("server failed");
}
