use std::sync::RwLock;

use docledger_types::DocumentEntry;

use crate::error::LedgerError;
use crate::record::{Record, RecordFactory};
use crate::traits::{LedgerReader, LedgerWriter};
use crate::validator::{Admissibility, ChainValidator, RejectReason};

/// Result of an append attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The candidate passed validation and is now the tail.
    Appended(Record),
    /// The candidate failed validation; the chain is unchanged.
    Rejected(RejectReason),
}

impl AppendOutcome {
    /// Returns `true` if a record was committed.
    pub fn is_appended(&self) -> bool {
        matches!(self, Self::Appended(_))
    }

    /// The committed record, if any.
    pub fn record(&self) -> Option<&Record> {
        match self {
            Self::Appended(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }
}

/// In-memory registration chain.
///
/// Construction is initialization: a new ledger holds exactly one genesis
/// record, and there is no way to re-initialize an existing instance. The
/// chain only ever grows, one validated record at a time, and lives for the
/// life of the process.
///
/// Concurrency contract: the interior lock serializes every mutation.
/// [`append`](Self::append) holds the write guard across the whole
/// read-tail, build, validate, commit sequence, so two racing appends can
/// never both validate against the same tail. Reads take the read guard and
/// observe only committed records. Share the ledger as an
/// `Arc<InMemoryLedger>`; handlers receive it injected, never through a
/// global.
pub struct InMemoryLedger {
    inner: RwLock<ChainState>,
}

struct ChainState {
    chain: Vec<Record>,
}

impl InMemoryLedger {
    /// Create a ledger containing exactly one genesis record.
    pub fn new() -> Result<Self, LedgerError> {
        let genesis = RecordFactory::genesis()?;
        tracing::debug!(hash = %genesis.hash.short_hex(), "chain initialized at genesis");
        Ok(Self {
            inner: RwLock::new(ChainState {
                chain: vec![genesis],
            }),
        })
    }

    /// Validate `candidate` against the current tail and commit it.
    ///
    /// Callers must hold the write guard that produced the tail the
    /// candidate was built from.
    fn admit(state: &mut ChainState, candidate: Record) -> Result<AppendOutcome, LedgerError> {
        let tail = state.chain.last().ok_or(LedgerError::EmptyChain)?;

        match ChainValidator::evaluate(&candidate, tail)? {
            Admissibility::Admissible => {
                tracing::debug!(
                    position = candidate.position,
                    hash = %candidate.hash.short_hex(),
                    "record committed"
                );
                state.chain.push(candidate.clone());
                Ok(AppendOutcome::Appended(candidate))
            }
            Admissibility::Rejected(reason) => {
                tracing::warn!(
                    position = candidate.position,
                    %reason,
                    "candidate rejected"
                );
                Ok(AppendOutcome::Rejected(reason))
            }
        }
    }
}

impl LedgerWriter for InMemoryLedger {
    fn append(&self, entry: DocumentEntry) -> Result<AppendOutcome, LedgerError> {
        let mut state = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;

        let tail = state.chain.last().ok_or(LedgerError::EmptyChain)?;
        let candidate = RecordFactory::next(tail, entry)?;

        Self::admit(&mut state, candidate)
    }
}

impl LedgerReader for InMemoryLedger {
    fn tail(&self) -> Result<Record, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        state.chain.last().cloned().ok_or(LedgerError::EmptyChain)
    }

    fn snapshot(&self) -> Result<Vec<Record>, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(state.chain.clone())
    }

    fn record_count(&self) -> Result<u64, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(state.chain.len() as u64)
    }
}
