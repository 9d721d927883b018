use clap::Parser;
use global_search::{
    api::{build_router, AppState},
    config::Config,
    fixtures,
    search::GlobalSearchService,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Demo server: the global search engine over a seeded in-memory dataset
#[derive(Debug, Parser)]
#[command(name = "global-search-server", version)]
struct Args {
    /// Bind host (overrides configuration)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides configuration)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "global_search=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.http_port = port;
    }

    tracing::info!("Starting global search server v{}", env!("CARGO_PKG_VERSION"));

    // Build the searchable-entity registry and the demo dataset
    let registry = Arc::new(fixtures::demo_registry());
    let backend = Arc::new(fixtures::seeded_backend());
    tracing::info!(entities = registry.len(), "Search registry loaded");

    let service = Arc::new(GlobalSearchService::new(
        registry,
        backend,
        config.search.clone(),
    ));
    tracing::info!(
        timeout_ms = config.search.global_timeout_ms,
        per_model_cap = config.search.per_model_cap,
        "Search service initialized"
    );

    let app = build_router(AppState::new(service));

    let addr = format!("{}:{}", config.server.host, config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
