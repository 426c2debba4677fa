//! HTTP boundary for Docledger.
//!
//! Translates JSON requests into ledger operations: chain reads, validated
//! registration appends, deed identifier derivation, and a liveness probe.
//! The chain itself lives in `docledger-ledger`; this crate only marshals.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::LedgerServer;
pub use state::AppState;
