use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::proxy::ForwardError;

use super::AppState;

/// Single proxy endpoint; the `route` query parameter selects the upstream
/// call. Every failure is serialized as `{"error": "<message>"}`.
pub async fn riot_proxy(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match state.forwarder.forward(&params).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => error_response(&error),
    }
}

fn error_response(error: &ForwardError) -> Response {
    let status = match error {
        ForwardError::UnknownRoute => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
