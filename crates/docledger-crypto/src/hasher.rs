use docledger_types::ChainDigest;

/// Domain-separated BLAKE3 content hasher.
///
/// Each hasher carries a domain tag that is prepended to every hash
/// computation, so values of different kinds can never collide even when
/// their bytes are identical.
pub struct ContentHasher {
    domain: &'static str,
}

impl ContentHasher {
    /// Hasher for chain records.
    pub const RECORD: Self = Self {
        domain: "docledger-record-v1",
    };
    /// Hasher for derived deed identifiers.
    pub const DEED_ID: Self = Self {
        domain: "docledger-deed-id-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash raw bytes with domain separation.
    pub fn hash(&self, data: &[u8]) -> ChainDigest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        ChainDigest::from_hash(*hasher.finalize().as_bytes())
    }

    /// Hash a serializable value as canonical JSON with domain separation.
    pub fn hash_json<T: serde::Serialize>(&self, value: &T) -> Result<ChainDigest, HasherError> {
        let data =
            serde_json::to_vec(value).map_err(|e| HasherError::Serialization(e.to_string()))?;
        Ok(self.hash(&data))
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

/// Errors from hashing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HasherError {
    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let data = b"deed 42/2024";
        assert_eq!(ContentHasher::RECORD.hash(data), ContentHasher::RECORD.hash(data));
    }

    #[test]
    fn different_domains_produce_different_digests() {
        let data = b"same content";
        assert_ne!(
            ContentHasher::RECORD.hash(data),
            ContentHasher::DEED_ID.hash(data)
        );
    }

    #[test]
    fn hash_json_matches_hashing_the_bytes() {
        let value = serde_json::json!({"documentId": "D1"});
        let by_value = ContentHasher::RECORD.hash_json(&value).unwrap();
        let by_bytes = ContentHasher::RECORD.hash(&serde_json::to_vec(&value).unwrap());
        assert_eq!(by_value, by_bytes);
    }

    #[test]
    fn custom_domain() {
        let hasher = ContentHasher::new("docledger-test-v1");
        assert_ne!(hasher.hash(b"data"), ContentHasher::RECORD.hash(b"data"));
    }
}
