pub mod config;
pub mod error;
pub mod state;
pub mod locale;
pub mod notify;
pub mod routes;
pub mod store;
pub mod submission;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::notify::Notifier;
use crate::state::{AppState, SharedState};
use crate::store::ContactStore;

pub fn build_app(
    store: Arc<dyn ContactStore>,
    notifier: Option<Arc<dyn Notifier>>,
    config: Config,
) -> Router {
    let state: SharedState = Arc::new(AppState {
        store,
        notifier,
        config,
    });

    Router::new()
        .merge(routes::contact_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
