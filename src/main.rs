use anyhow::Context;
use knowledge_capture::api::{self, app_state::AppState};
use knowledge_capture::config::ConfigLoader;
use knowledge_capture::observability::{VERSION, init_tracing};
use knowledge_capture::storage::{EntryRepository, InMemoryEntryStore};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;

    let _log_guard = init_tracing(&config.logging)?;
    info!(
        "Starting {} v{} ({})",
        config.app_name, VERSION, config.environment
    );

    let store = if config.store.seed_on_startup {
        InMemoryEntryStore::seeded()
    } else {
        InMemoryEntryStore::new()
    };
    let repository: Arc<dyn EntryRepository> = Arc::new(store);
    info!(
        "Entry store initialized with {} entries",
        repository.count().await?
    );

    let app_state = AppState::from_config(&config, repository);
    info!(
        "Simulated latency: {} ms, test reset enabled: {}",
        config.latency.delay_ms, app_state.test_reset_enabled
    );

    let router = api::create_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
