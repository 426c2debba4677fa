use std::sync::Arc;

use tokio::net::TcpListener;

use docledger_ledger::{InMemoryLedger, LedgerReader};

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::state::AppState;

/// Docledger registration server.
pub struct LedgerServer {
    config: ServerConfig,
    state: AppState,
}

impl LedgerServer {
    pub fn new(config: ServerConfig, ledger: Arc<InMemoryLedger>) -> Self {
        Self {
            config,
            state: AppState::new(ledger),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        self.dump_chain()?;

        let app = build_router(self.state.clone());
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("docledger server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))
    }

    /// Log the committed chain at startup. Works from a snapshot, so it
    /// never races a concurrent append.
    fn dump_chain(&self) -> ServerResult<()> {
        for record in self.state.ledger.snapshot()? {
            tracing::debug!(
                position = record.position,
                hash = %record.hash.short_hex(),
                predecessor = %record.predecessor.short_hex(),
                document_id = %record.entry.document_id,
                "chain record"
            );
        }
        Ok(())
    }
}
