use chrono::{DateTime, SecondsFormat, Utc};
use docledger_types::{ChainDigest, DocumentEntry};

use crate::hasher::{ContentHasher, HasherError};

/// Compute the link hash for a chain record.
///
/// The digest covers, in order: the decimal position, the RFC 3339 timestamp,
/// the canonical JSON bytes of the entry, and the predecessor digest's hex
/// form (empty for the null predecessor).
///
/// Pure and deterministic: validation recomputes this over a candidate's own
/// fields and compares digests, which only works because equal inputs always
/// hash equally.
pub fn link_hash(
    position: u64,
    timestamp: &DateTime<Utc>,
    entry: &DocumentEntry,
    predecessor: &ChainDigest,
) -> Result<ChainDigest, HasherError> {
    let entry_bytes =
        serde_json::to_vec(entry).map_err(|e| HasherError::Serialization(e.to_string()))?;

    let mut data = Vec::with_capacity(entry_bytes.len() + 128);
    data.extend_from_slice(position.to_string().as_bytes());
    data.push(b':');
    data.extend_from_slice(
        timestamp
            .to_rfc3339_opts(SecondsFormat::Micros, true)
            .as_bytes(),
    );
    data.push(b':');
    data.extend_from_slice(&entry_bytes);
    data.push(b':');
    data.extend_from_slice(predecessor.to_hex().as_bytes());

    Ok(ContentHasher::RECORD.hash(&data))
}
