use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docledger_crypto::link_hash;
use docledger_types::{ChainDigest, DocumentEntry};

use crate::error::LedgerError;

/// One entry in the registration chain. Immutable once created.
///
/// The stored `hash` covers every other field, including the predecessor
/// digest, so any post-construction change to a record is detectable by
/// recomputation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based chain position; genesis is 0.
    pub position: u64,
    /// The registration payload.
    #[serde(rename = "payload")]
    pub entry: DocumentEntry,
    /// Creation time, stamped once when the record is built.
    pub timestamp: DateTime<Utc>,
    /// Link hash over (position, timestamp, payload, predecessor).
    pub hash: ChainDigest,
    /// Hash of the preceding record; null for genesis.
    #[serde(rename = "predecessorHash")]
    pub predecessor: ChainDigest,
}

impl Record {
    /// Recompute this record's link hash from its own fields.
    pub fn recompute_hash(&self) -> Result<ChainDigest, LedgerError> {
        Ok(link_hash(
            self.position,
            &self.timestamp,
            &self.entry,
            &self.predecessor,
        )?)
    }
}

/// Builds chain records with position, timestamp, predecessor, and hash
/// stamped in one place.
pub struct RecordFactory;

impl RecordFactory {
    /// Build the genesis record: position 0, null predecessor, genesis payload.
    pub fn genesis() -> Result<Record, LedgerError> {
        Self::build(0, Utc::now(), DocumentEntry::genesis(), ChainDigest::null())
    }

    /// Build the successor of `previous` carrying `entry`.
    ///
    /// The timestamp is wall-clock time captured once, clamped so it never
    /// runs behind the predecessor's stamp. Chains built through the factory
    /// are therefore non-decreasing in time.
    pub fn next(previous: &Record, entry: DocumentEntry) -> Result<Record, LedgerError> {
        let timestamp = Utc::now().max(previous.timestamp);
        Self::build(previous.position + 1, timestamp, entry, previous.hash)
    }

    fn build(
        position: u64,
        timestamp: DateTime<Utc>,
        entry: DocumentEntry,
        predecessor: ChainDigest,
    ) -> Result<Record, LedgerError> {
        let hash = link_hash(position, &timestamp, &entry, &predecessor)?;
        Ok(Record {
            position,
            entry,
            timestamp,
            hash,
            predecessor,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn genesis_shape() {
        let genesis = RecordFactory::genesis().unwrap();
        assert_eq!(genesis.position, 0);
        assert!(genesis.predecessor.is_null());
        assert!(genesis.entry.is_genesis);
        assert_eq!(genesis.recompute_hash().unwrap(), genesis.hash);
    }

    #[test]
    fn next_links_to_previous() {
        let genesis = RecordFactory::genesis().unwrap();
        let record =
            RecordFactory::next(&genesis, DocumentEntry::new("D1", "u-1", "2024-03-01")).unwrap();
        assert_eq!(record.position, 1);
        assert_eq!(record.predecessor, genesis.hash);
        assert!(!record.entry.is_genesis);
        assert_eq!(record.recompute_hash().unwrap(), record.hash);
    }

    #[test]
    fn timestamp_never_runs_behind_previous() {
        let mut genesis = RecordFactory::genesis().unwrap();
        genesis.timestamp = Utc::now() + Duration::hours(1);
        let record =
            RecordFactory::next(&genesis, DocumentEntry::new("D1", "u-1", "2024-03-01")).unwrap();
        assert!(record.timestamp >= genesis.timestamp);
    }

    #[test]
    fn recompute_detects_payload_mutation() {
        let genesis = RecordFactory::genesis().unwrap();
        let mut record =
            RecordFactory::next(&genesis, DocumentEntry::new("D1", "u-1", "2024-03-01")).unwrap();
        record.entry.document_id = "D1-forged".into();
        assert_ne!(record.recompute_hash().unwrap(), record.hash);
    }

    #[test]
    fn wire_field_names() {
        let genesis = RecordFactory::genesis().unwrap();
        let json = serde_json::to_value(&genesis).unwrap();
        assert!(json.get("position").is_some());
        assert!(json.get("payload").is_some());
        assert!(json.get("timestamp").is_some());
        assert!(json.get("hash").is_some());
        assert_eq!(json["predecessorHash"], "");
    }

    #[test]
    fn serde_roundtrip_preserves_the_hash() {
        let genesis = RecordFactory::genesis().unwrap();
        let record =
            RecordFactory::next(&genesis, DocumentEntry::new("D1", "u-1", "2024-03-01")).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.recompute_hash().unwrap(), parsed.hash);
    }
}
