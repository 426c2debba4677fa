use crate::error::LedgerError;
use crate::record::Record;
use crate::traits::LedgerReader;

/// Result of a full-chain audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainReport {
    pub record_count: u64,
    pub genesis_valid: bool,
    pub hash_chain_valid: bool,
    pub positions_contiguous: bool,
    pub violations: Vec<Violation>,
}

impl ChainReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific integrity violation detected during an audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub position: u64,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    MissingGenesis,
    MalformedGenesis,
    HashChainBreak,
    DigestMismatch,
    PositionGap,
}

/// Whole-chain integrity verifier.
///
/// Where [`crate::ChainValidator`] judges one candidate at the tail, the
/// auditor re-checks every committed record: genesis shape, predecessor
/// links, digest recomputation, and position contiguity.
pub struct ChainAuditor;

impl ChainAuditor {
    /// Audit the full chain behind a reader.
    pub fn audit<R: LedgerReader + ?Sized>(reader: &R) -> Result<ChainReport, LedgerError> {
        Ok(Self::audit_records(&reader.snapshot()?))
    }

    /// Audit an already-materialized chain.
    pub fn audit_records(chain: &[Record]) -> ChainReport {
        let mut violations = Vec::new();
        let mut genesis_valid = true;
        let mut hash_chain_valid = true;
        let mut positions_contiguous = true;

        match chain.first() {
            None => {
                genesis_valid = false;
                violations.push(Violation {
                    position: 0,
                    kind: ViolationKind::MissingGenesis,
                    description: "chain has no genesis record".into(),
                });
            }
            Some(genesis) => {
                if genesis.position != 0 || !genesis.predecessor.is_null() || !genesis.entry.is_genesis
                {
                    genesis_valid = false;
                    violations.push(Violation {
                        position: genesis.position,
                        kind: ViolationKind::MalformedGenesis,
                        description:
                            "genesis must sit at position 0 with a null predecessor and the genesis flag"
                                .into(),
                    });
                }
            }
        }

        for (index, record) in chain.iter().enumerate() {
            // Digest recomputation; a payload that cannot be canonicalized
            // counts as a mismatch here rather than aborting the audit.
            match record.recompute_hash() {
                Ok(computed) if computed == record.hash => {}
                Ok(_) | Err(_) => {
                    hash_chain_valid = false;
                    violations.push(Violation {
                        position: record.position,
                        kind: ViolationKind::DigestMismatch,
                        description: "record hash does not recompute from its fields".into(),
                    });
                }
            }

            if index == 0 {
                continue;
            }
            let previous = &chain[index - 1];

            if record.predecessor != previous.hash {
                hash_chain_valid = false;
                violations.push(Violation {
                    position: record.position,
                    kind: ViolationKind::HashChainBreak,
                    description: "predecessor hash link mismatch".into(),
                });
            }

            if record.position != previous.position + 1 {
                positions_contiguous = false;
                violations.push(Violation {
                    position: record.position,
                    kind: ViolationKind::PositionGap,
                    description: format!(
                        "expected position {}, found {}",
                        previous.position + 1,
                        record.position
                    ),
                });
            }
        }

        ChainReport {
            record_count: chain.len() as u64,
            genesis_valid,
            hash_chain_valid,
            positions_contiguous,
            violations,
        }
    }
}
