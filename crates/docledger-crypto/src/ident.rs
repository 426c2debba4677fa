use crate::hasher::ContentHasher;

/// Derive a deterministic deed identifier from its number and publish date.
///
/// Returns a 32-character hex string: a domain-separated hash truncated to
/// 128 bits. The identifier is not part of the integrity chain; it only has
/// to be stable for a given `(deed_number, publish_date)` pair.
pub fn derive_document_id(deed_number: &str, publish_date: &str) -> String {
    let mut data = Vec::with_capacity(deed_number.len() + publish_date.len());
    data.extend_from_slice(deed_number.as_bytes());
    data.extend_from_slice(publish_date.as_bytes());

    let digest = ContentHasher::DEED_ID.hash(&data);
    hex::encode(&digest.as_bytes()[..16])
}
