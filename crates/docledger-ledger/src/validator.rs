use std::fmt;

use crate::error::LedgerError;
use crate::record::Record;

/// Why a candidate was refused.
///
/// Rejection is a normal negative outcome, not an error: the chain simply
/// declines to grow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The candidate does not link to the current tail's hash.
    PredecessorMismatch,
    /// The candidate's stored hash does not recompute from its own fields.
    DigestMismatch,
    /// The candidate's position does not follow the tail's.
    PositionGap { expected: u64, actual: u64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PredecessorMismatch => write!(f, "predecessor hash does not match the tail"),
            Self::DigestMismatch => write!(f, "record hash does not recompute from its fields"),
            Self::PositionGap { expected, actual } => {
                write!(f, "position {actual} does not follow the tail (expected {expected})")
            }
        }
    }
}

/// The validator's verdict on a candidate record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admissibility {
    Admissible,
    Rejected(RejectReason),
}

impl Admissibility {
    /// Returns `true` if the candidate may be appended.
    pub fn is_admissible(&self) -> bool {
        matches!(self, Self::Admissible)
    }
}

/// Decides whether a candidate record may extend the chain at its tail.
///
/// Three checks, each necessary and none sufficient alone:
/// 1. the candidate's predecessor digest equals the tail's hash,
/// 2. the candidate's hash recomputes from its own fields,
/// 3. the candidate's position is the tail's plus one.
///
/// Evaluation short-circuits on the first failure.
pub struct ChainValidator;

impl ChainValidator {
    /// Evaluate a candidate against the current tail.
    ///
    /// `Err` is reserved for payloads that cannot be canonicalized during
    /// recomputation; a failed check is an `Ok(Rejected(_))`.
    pub fn evaluate(candidate: &Record, tail: &Record) -> Result<Admissibility, LedgerError> {
        if candidate.predecessor != tail.hash {
            return Ok(Admissibility::Rejected(RejectReason::PredecessorMismatch));
        }

        // Recomputation also catches tampering with payload, timestamp, or
        // position after construction.
        if candidate.recompute_hash()? != candidate.hash {
            return Ok(Admissibility::Rejected(RejectReason::DigestMismatch));
        }

        let expected = tail.position + 1;
        if candidate.position != expected {
            return Ok(Admissibility::Rejected(RejectReason::PositionGap {
                expected,
                actual: candidate.position,
            }));
        }

        Ok(Admissibility::Admissible)
    }

    /// Convenience form of [`Self::evaluate`] collapsing errors to refusal.
    pub fn is_admissible(candidate: &Record, tail: &Record) -> bool {
        matches!(Self::evaluate(candidate, tail), Ok(Admissibility::Admissible))
    }
}

#[cfg(test)]
mod tests {
    use docledger_types::{ChainDigest, DocumentEntry};

    use crate::record::RecordFactory;

    use super::*;

    fn chain_of_two() -> (Record, Record) {
        let genesis = RecordFactory::genesis().unwrap();
        let tail =
            RecordFactory::next(&genesis, DocumentEntry::new("D1", "u-1", "2024-03-01")).unwrap();
        (genesis, tail)
    }

    fn candidate_for(tail: &Record) -> Record {
        RecordFactory::next(tail, DocumentEntry::new("D2", "u-2", "2024-03-02")).unwrap()
    }

    #[test]
    fn fresh_candidate_is_admissible() {
        let (_, tail) = chain_of_two();
        let candidate = candidate_for(&tail);
        assert_eq!(
            ChainValidator::evaluate(&candidate, &tail).unwrap(),
            Admissibility::Admissible
        );
        assert!(ChainValidator::is_admissible(&candidate, &tail));
    }

    #[test]
    fn wrong_predecessor_is_rejected() {
        let (_, tail) = chain_of_two();
        let mut candidate = candidate_for(&tail);
        candidate.predecessor = ChainDigest::from_hash([9; 32]);
        assert_eq!(
            ChainValidator::evaluate(&candidate, &tail).unwrap(),
            Admissibility::Rejected(RejectReason::PredecessorMismatch)
        );
    }

    #[test]
    fn candidate_built_from_stale_tail_is_rejected() {
        // Two candidates built from the same tail: once the first lands, the
        // second no longer links.
        let (_, tail) = chain_of_two();
        let landed = candidate_for(&tail);
        let stale = candidate_for(&tail);
        assert_eq!(
            ChainValidator::evaluate(&stale, &landed).unwrap(),
            Admissibility::Rejected(RejectReason::PredecessorMismatch)
        );
    }

    #[test]
    fn mutated_payload_is_rejected() {
        let (_, tail) = chain_of_two();
        let mut candidate = candidate_for(&tail);
        candidate.entry.document_id = "D2-forged".into();
        assert_eq!(
            ChainValidator::evaluate(&candidate, &tail).unwrap(),
            Admissibility::Rejected(RejectReason::DigestMismatch)
        );
    }

    #[test]
    fn mutated_timestamp_is_rejected() {
        let (_, tail) = chain_of_two();
        let mut candidate = candidate_for(&tail);
        candidate.timestamp = candidate.timestamp + chrono::Duration::seconds(1);
        assert_eq!(
            ChainValidator::evaluate(&candidate, &tail).unwrap(),
            Admissibility::Rejected(RejectReason::DigestMismatch)
        );
    }

    #[test]
    fn forged_hash_is_rejected() {
        let (_, tail) = chain_of_two();
        let mut candidate = candidate_for(&tail);
        candidate.hash = ChainDigest::from_hash([1; 32]);
        assert_eq!(
            ChainValidator::evaluate(&candidate, &tail).unwrap(),
            Admissibility::Rejected(RejectReason::DigestMismatch)
        );
    }

    #[test]
    fn position_off_by_one_is_rejected() {
        // Mutating only the position breaks the digest first; rebuild the
        // hash so the position check itself is exercised.
        let (_, tail) = chain_of_two();
        let mut candidate = candidate_for(&tail);
        candidate.position += 1;
        candidate.hash = candidate.recompute_hash().unwrap();
        assert_eq!(
            ChainValidator::evaluate(&candidate, &tail).unwrap(),
            Admissibility::Rejected(RejectReason::PositionGap {
                expected: tail.position + 1,
                actual: tail.position + 2,
            })
        );
    }

    #[test]
    fn committed_record_resubmitted_with_edits_is_rejected() {
        // Tampered copies of an already-committed record never re-enter the
        // chain: every single-field mutation trips one of the three checks.
        let (_, tail) = chain_of_two();
        let committed = candidate_for(&tail);

        let mut forged_entry = committed.clone();
        forged_entry.entry.user_key = "intruder".into();
        assert!(!ChainValidator::is_admissible(&forged_entry, &committed));

        let mut forged_position = committed.clone();
        forged_position.position = 7;
        assert!(!ChainValidator::is_admissible(&forged_position, &committed));

        let mut forged_link = committed.clone();
        forged_link.predecessor = ChainDigest::null();
        assert!(!ChainValidator::is_admissible(&forged_link, &committed));
    }
}
