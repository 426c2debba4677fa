use serde::{Deserialize, Serialize};

/// Deed metadata submitted to the identifier-derivation endpoint.
///
/// Not part of the chain. The endpoint fills `id` from the deed number and
/// publish date and echoes the document back; registering the result on the
/// ledger is a separate call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeedDocument {
    /// Derived identifier; ignored on input.
    #[serde(default)]
    pub id: String,
    /// Deed title.
    #[serde(default)]
    pub title: String,
    /// Issuing notary.
    #[serde(default)]
    pub notary: String,
    /// Publication date of the deed.
    #[serde(rename = "publishDate", default)]
    pub publish_date: String,
    /// Official deed number.
    #[serde(rename = "deedNumber", default)]
    pub deed_number: String,
}
