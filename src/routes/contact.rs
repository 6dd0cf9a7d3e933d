use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::error::ProcessError;
use crate::locale::Locale;
use crate::state::SharedState;
use crate::submission::pipeline;

// Browsers block cross-origin form posts without these.
const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "OPTIONS, POST"),
];

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let origin = headers
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let locale = Locale::from_origin(origin);
    let messages = locale.messages();

    match pipeline::run(&state, origin, locale, &body).await {
        Ok(result) => respond(
            StatusCode::OK,
            json!({ "message": messages.success, "contact_id": result.contact_id }),
        ),
        Err(ProcessError::MissingFields) => respond(
            StatusCode::BAD_REQUEST,
            json!({ "error": messages.missing_fields }),
        ),
        Err(ProcessError::Internal(detail)) => {
            tracing::error!("Error processing contact submission: {detail}");
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": messages.server_error }),
            )
        }
    }
}

pub async fn submit_options() -> Response {
    (StatusCode::NO_CONTENT, CORS_HEADERS).into_response()
}

fn respond(status: StatusCode, body: Value) -> Response {
    (status, CORS_HEADERS, Json(body)).into_response()
}
