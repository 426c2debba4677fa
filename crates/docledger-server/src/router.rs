use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all Docledger endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handler::chain_handler).post(handler::register_handler),
        )
        .route("/new", post(handler::new_document_handler))
        .route("/health", get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
