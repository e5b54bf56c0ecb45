use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{riot_proxy::riot_proxy, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/riot-proxy", get(riot_proxy))
        .with_state(state)
}
