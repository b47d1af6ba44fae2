//! not-found-page server entry point.
//!
//! Loads the static site data and starts the Axum HTTP server.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use not_found_page::app_state::AppState;
use not_found_page::config::{LogFormat, PageConfig};
use not_found_page::data::load_site_data;
use not_found_page::router::build_app;
use not_found_page::service::PageService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = PageConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, site = %config.site_name, "starting not-found-page");

    // Load static data
    let data = load_site_data(
        &config.domains_path,
        &config.fun_facts_path,
        &config.loading_messages_path,
    )
    .await
    .context("loading site data")?;

    // Build service layer and router
    let state = AppState::new(PageService::new(config.site_name.clone(), data));
    let app = build_app(state, config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
