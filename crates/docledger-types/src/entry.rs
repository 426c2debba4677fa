use serde::{Deserialize, Serialize};

/// The registration payload carried by each chain record.
///
/// The ledger treats this as an opaque serializable value; only the genesis
/// flag has meaning to the chain itself. Field order is the canonical
/// serialization order, so two logically equal entries always produce the
/// same bytes. The link hash depends on that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Identifier of the registered document.
    #[serde(rename = "documentId", default)]
    pub document_id: String,
    /// Key of the user registering the document.
    #[serde(rename = "userKey", default)]
    pub user_key: String,
    /// Date the document was issued.
    #[serde(rename = "documentDate", default)]
    pub document_date: String,
    /// Set only on the synthetic first record of a chain.
    #[serde(rename = "isGenesis", default)]
    pub is_genesis: bool,
}

impl DocumentEntry {
    /// Payload for a chain's genesis record.
    pub fn genesis() -> Self {
        Self {
            is_genesis: true,
            ..Self::default()
        }
    }

    /// A registration entry for the given document.
    pub fn new(
        document_id: impl Into<String>,
        user_key: impl Into<String>,
        document_date: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            user_key: user_key.into(),
            document_date: document_date.into(),
            is_genesis: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_sets_only_the_flag() {
        let entry = DocumentEntry::genesis();
        assert!(entry.is_genesis);
        assert!(entry.document_id.is_empty());
        assert!(entry.user_key.is_empty());
        assert!(entry.document_date.is_empty());
    }

    #[test]
    fn serde_field_names_are_stable() {
        let entry = DocumentEntry::new("D1", "u-17", "2024-03-01");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["documentId"], "D1");
        assert_eq!(json["userKey"], "u-17");
        assert_eq!(json["documentDate"], "2024-03-01");
        assert_eq!(json["isGenesis"], false);
    }

    #[test]
    fn missing_fields_default() {
        let entry: DocumentEntry = serde_json::from_str(r#"{"documentId":"D9"}"#).unwrap();
        assert_eq!(entry.document_id, "D9");
        assert!(!entry.is_genesis);
    }

    #[test]
    fn canonical_bytes_are_deterministic() {
        let a = DocumentEntry::new("D1", "u", "2024-01-01");
        let b = DocumentEntry::new("D1", "u", "2024-01-01");
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }
}
