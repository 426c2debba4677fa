use docledger_types::DocumentEntry;

use crate::error::LedgerError;
use crate::memory::AppendOutcome;
use crate::record::Record;

/// Write boundary for chain mutation. `append` is the only mutating
/// operation a ledger exposes.
pub trait LedgerWriter: Send + Sync {
    /// Build, validate, and commit a record carrying `entry`.
    fn append(&self, entry: DocumentEntry) -> Result<AppendOutcome, LedgerError>;
}

/// Read boundary for chain queries. Implementations return only
/// fully-committed state.
pub trait LedgerReader: Send + Sync {
    /// The most recently committed record.
    fn tail(&self) -> Result<Record, LedgerError>;

    /// A consistent copy of the full chain in order.
    fn snapshot(&self) -> Result<Vec<Record>, LedgerError>;

    /// Number of committed records, genesis included.
    fn record_count(&self) -> Result<u64, LedgerError>;
}
