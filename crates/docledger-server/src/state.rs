use std::sync::Arc;

use docledger_ledger::InMemoryLedger;

/// Shared request-handler state.
///
/// The ledger is injected at construction and shared by reference; there is
/// no process-wide instance.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<InMemoryLedger>,
}

impl AppState {
    pub fn new(ledger: Arc<InMemoryLedger>) -> Self {
        Self { ledger }
    }
}
