use docledger_crypto::HasherError;

/// Errors produced by ledger operations.
///
/// A rejected candidate is not an error; rejection travels as
/// [`crate::AppendOutcome::Rejected`]. These variants cover the genuinely
/// exceptional cases only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("ledger lock poisoned by a writer panic")]
    LockPoisoned,

    #[error("chain has no records")]
    EmptyChain,
}

impl From<HasherError> for LedgerError {
    fn from(err: HasherError) -> Self {
        match err {
            HasherError::Serialization(msg) => Self::Serialization(msg),
        }
    }
}
