mod config;
mod contact;
mod content;
mod errors;
mod render;
mod routes;
mod seo;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::{ContactRelay, ContactService, HttpRelay};
use crate::content::ContentProvider;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae site v{}", env!("CARGO_PKG_VERSION"));

    // Content is loaded once; a bad document stops startup.
    let source = config.content_source();
    let content = ContentProvider::load(&source)
        .with_context(|| format!("loading resume content from {source}"))?;
    info!(
        "Resume content loaded from {source}: {} roles, {} skill categories",
        content.content().experience.len(),
        content.skills_with_content().len()
    );

    let relay: Option<Arc<dyn ContactRelay>> = match &config.contact_endpoint {
        Some(endpoint) => {
            let relay = HttpRelay::new(
                endpoint.clone(),
                Duration::from_secs(config.contact_timeout_secs),
            )
            .context("building contact relay client")?;
            info!("Contact form relays to {}", relay.endpoint());
            Some(Arc::new(relay))
        }
        None => {
            warn!("CONTACT_ENDPOINT not set; contact form disabled");
            None
        }
    };

    let state = AppState {
        content,
        contact: ContactService::new(relay),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
