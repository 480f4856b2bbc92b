//! Marquee - event ticketing web app
//!
//! Server binary: serves the Dioxus application (SSR + hydration assets)
//! and the same-origin `/api` endpoints that talk to the hosted backend.
//! On wasm the same binary becomes the hydrating client.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use marquee::{api, app, backend, config};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Marquee");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(port = config.port, backend = %config.backend.url, "Configuration loaded");

    // Backend clients share the project key; per-user access rides on the
    // bearer tokens forwarded with each request.
    let auth = backend::AuthClient::new(&config.backend.url, &config.backend.anon_key);
    let rest = backend::RestClient::new(&config.backend.url, &config.backend.anon_key);
    let state = api::AppState::new(auth, rest, &config.public_url);

    // API routes plus the Dioxus application (SSR + static assets)
    let serve_config = ServeConfig::new();
    let router = axum::Router::new()
        .serve_dioxus_application(serve_config, app::App)
        .nest("/api", api::router(state))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(marquee::app::App);
}
