use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use focus_sessions::adapters::clock::SystemClock;
use focus_sessions::adapters::http::{app_router, AppState, SessionHandlers, ShutdownSignal};
use focus_sessions::adapters::sqlite::{self, SqliteSessionStore};
use focus_sessions::config::{AppConfig, LogFormat, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&cfg.logging);
    cfg.validate().context("invalid configuration")?;

    info!(url = %cfg.database.url, "Opening database...");
    let pool = sqlite::open_pool(&cfg.database)
        .await
        .context("failed to open database")?;

    if cfg.database.run_migrations {
        sqlite::run_migrations(&pool)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let shutdown = ShutdownSignal::new();
    let sessions = SessionHandlers::new(
        Arc::new(SqliteSessionStore::new(pool.clone())),
        Arc::new(SystemClock),
    );
    let app = app_router(AppState::new(sessions, shutdown.clone()), &cfg.server);

    let addr = cfg.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .context("server error")?;

    pool.close().await;
    info!("Server stopped.");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

// ── Graceful shutdown ──────────────────────────────────────────────────────

async fn shutdown_signal(shutdown: ShutdownSignal) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Failed to listen for Ctrl-C");
                // Keep serving until the HTTP trigger fires instead.
                shutdown.triggered().await;
            }
        }
        _ = shutdown.triggered() => {}
    }
    info!("Shutdown signal received, stopping server...");
}
