// Main entry point for the Frontdesk API server

use anyhow::{Context, Result};
use resend_client::ResendClient;
use server_core::kernel::ResendMailer;
use server_core::server::{build_app, AppState};
use server_core::Config;
use std::sync::Arc;
use supabase_client::{SupabaseClient, SupabaseOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Frontdesk API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // One client per collaborator, shared for the process lifetime.
    let supabase = Arc::new(SupabaseClient::new(SupabaseOptions {
        project_url: config.supabase_url.clone(),
        anon_key: config.supabase_anon_key.clone(),
        service_role_key: config.supabase_service_role_key.clone(),
    }));
    let mailer = Arc::new(ResendMailer::new(
        ResendClient::new(config.resend_api_key.clone()),
        config.mail_from.clone(),
    ));

    let state = AppState {
        identity: supabase.clone(),
        data: supabase,
        mailer,
    };

    // Build application
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
