//! # Core Domain Entities
//!
//! The letter-of-credit record and the id index that makes records
//! enumerable over a store with no range queries.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// LETTER OF CREDIT
// =============================================================================

/// A letter-of-credit descriptor.
///
/// Stored as compact JSON under its `id`, unmodified. Field order below is
/// the canonical encoding order. Every field except `id` is an opaque string;
/// `price` and `date` are never parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterOfCredit {
    /// Unique identifier and ledger key.
    #[serde(rename = "cusip", deserialize_with = "null_as_empty")]
    pub id: String,
    /// Display name.
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Classification tag.
    #[serde(rename = "conracttype", deserialize_with = "null_as_empty")]
    pub contract_type: String,
    /// Counterparty identifier.
    #[serde(deserialize_with = "null_as_empty")]
    pub vendor: String,
    /// Decimal amount, kept as text.
    #[serde(deserialize_with = "null_as_empty")]
    pub price: String,
    /// Issuing institution.
    #[serde(deserialize_with = "null_as_empty")]
    pub bank: String,
    /// Unparsed date.
    #[serde(deserialize_with = "null_as_empty")]
    pub date: String,
}

/// Wire names of every record field, lowercase.
pub const RECORD_FIELDS: [&str; 7] = [
    "cusip",
    "name",
    "conracttype",
    "vendor",
    "price",
    "bank",
    "date",
];

// An explicit null leaves the field at its zero value.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl LetterOfCredit {
    /// Creates a record with the given id and all other fields empty.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The ledger key this record is stored under.
    #[must_use]
    pub fn state_key(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// RECORD INDEX
// =============================================================================

/// Ordered list of record ids, in creation order.
///
/// Append-only. Duplicates are kept: creating the same id twice yields two
/// entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordIndex {
    ids: Vec<String>,
}

impl RecordIndex {
    /// Empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an id at the end.
    pub fn push(&mut self, id: impl Into<String>) {
        self.ids.push(id.into());
    }

    /// Ids in creation order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Consume into the id list.
    #[must_use]
    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no id was ever appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns true if `id` appears at least once.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }
}

impl From<Vec<String>> for RecordIndex {
    fn from(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

// =============================================================================
// TESTS
// =============================================================================
