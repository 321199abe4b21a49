use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use steeple_shared::EventCatalog;
use steeple_site::{config::LogFormat, create_router, load_registry, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "steeple_site=info,steeple_shared=info,tower_http=info".into());
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    let registry = load_registry(&config).context("Failed to build tenant registry")?;

    tracing::info!("Steeple site starting");
    tracing::info!("  Listen:  {}", config.bind_address);
    tracing::info!("  Static:  {}", config.static_dir.display());
    tracing::info!(
        "  Tenants: {} ({} hosts)",
        registry.len(),
        registry.host_count()
    );
    for tenant in registry.tenants() {
        tracing::debug!(slug = %tenant.slug, church_id = %tenant.church_id, hosts = ?tenant.hosts, "Tenant registered");
    }

    let bind_address = config.bind_address.clone();
    let state = AppState::new(config, registry, EventCatalog::builtin());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;

    tracing::info!("Steeple site listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
