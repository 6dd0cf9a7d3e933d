pub mod contact;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn contact_routes() -> Router<SharedState> {
    Router::new()
        .route("/v1/contact", post(contact::submit))
        .route("/v1/contact", axum::routing::options(contact::submit_options))
}
