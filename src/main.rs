use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use contact_relay::config::Config;
use contact_relay::notify::{Notifier, SmtpNotifier};
use contact_relay::store::postgres::PgContactStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Load config
    let config = Config::from_env().expect("Failed to load configuration");

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting contact-relay for business unit {}", config.business_unit);

    // Create database pool
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Migrations applied");

    // Build SMTP notifier. Missing or broken SMTP config never stops the
    // service; submissions are accepted without notifications.
    let notifier: Option<Arc<dyn Notifier>> = match &config.smtp {
        Some(smtp) => match SmtpNotifier::new(smtp) {
            Ok(n) => {
                tracing::info!("SMTP notifications configured");
                Some(Arc::new(n))
            }
            Err(e) => {
                tracing::warn!("SMTP notifications not available: {e}");
                None
            }
        },
        None => {
            tracing::info!("SMTP not configured, notifications disabled");
            None
        }
    };

    let store = Arc::new(PgContactStore::new(pool));

    let addr = SocketAddr::new(config.host, config.port);
    let app = contact_relay::build_app(store, notifier, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
