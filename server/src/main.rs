#![recursion_limit = "256"]

mod rate_limit;
mod relay;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // `.env` is optional; real environment variables win.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the email relay (non-fatal: the contact endpoint answers 503 if config missing).
    let relay: Option<Arc<dyn relay::EmailRelay>> = match relay::RelayClient::from_env() {
        Ok(client) => {
            tracing::info!(provider = client.provider_name(), "email relay initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "email relay not configured; contact form disabled");
            None
        }
    };

    let state = state::AppState::new(relay, rate_limit::RateLimiter::from_env());
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
