use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use docledger_crypto::derive_document_id;
use docledger_ledger::{AppendOutcome, LedgerReader, LedgerWriter};
use docledger_types::{DeedDocument, DocumentEntry};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// `GET /` — the full chain, oldest first, pretty-printed.
pub async fn chain_handler(State(state): State<AppState>) -> ServerResult<Response> {
    let chain = state.ledger.snapshot()?;
    pretty_json(StatusCode::OK, &chain)
}

/// `POST /` — register a document on the chain.
///
/// Acceptance echoes the payload back; a validation rejection surfaces as
/// 409 so callers can tell the two apart.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(entry): Json<DocumentEntry>,
) -> ServerResult<Response> {
    match state.ledger.append(entry.clone())? {
        AppendOutcome::Appended(record) => {
            tracing::info!(
                position = record.position,
                document_id = %record.entry.document_id,
                "registration accepted"
            );
            pretty_json(StatusCode::OK, &entry)
        }
        AppendOutcome::Rejected(reason) => {
            tracing::warn!(%reason, "registration rejected");
            Ok((
                StatusCode::CONFLICT,
                Json(json!({ "error": reason.to_string() })),
            )
                .into_response())
        }
    }
}

/// `POST /new` — derive a deterministic identifier for a deed.
///
/// Fills `id` from the deed number and publish date and echoes the document
/// back. Does not touch the ledger.
pub async fn new_document_handler(Json(mut deed): Json<DeedDocument>) -> ServerResult<Response> {
    deed.id = derive_document_id(&deed.deed_number, &deed.publish_date);
    pretty_json(StatusCode::OK, &deed)
}

/// `GET /health` — liveness probe.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "docledger-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> ServerResult<Response> {
    let body =
        serde_json::to_string_pretty(value).map_err(|e| ServerError::Encoding(e.to_string()))?;
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
