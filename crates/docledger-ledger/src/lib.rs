//! Append-only registration chain for Docledger.
//!
//! This crate is the heart of the system. It provides:
//! - [`Record`] and [`RecordFactory`] — hash-linked record construction
//! - [`ChainValidator`] — the three admissibility checks for a candidate
//! - [`InMemoryLedger`] — the locked, append-only chain with genesis
//! - [`LedgerWriter`] / [`LedgerReader`] trait boundaries
//! - [`ChainAuditor`] — full-chain integrity verification with a report

pub mod audit;
pub mod error;
pub mod memory;
pub mod record;
pub mod traits;
pub mod validator;

pub use audit::{ChainAuditor, ChainReport, Violation, ViolationKind};
pub use error::LedgerError;
pub use memory::{AppendOutcome, InMemoryLedger};
pub use record::{Record, RecordFactory};
pub use traits::{LedgerReader, LedgerWriter};
pub use validator::{Admissibility, ChainValidator, RejectReason};
