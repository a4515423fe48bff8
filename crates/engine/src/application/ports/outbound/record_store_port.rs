//! Record store port - the query capability over typed records.

use async_trait::async_trait;

use chroniclr_domain::EntityRecord;

/// Errors surfaced by the record store.
///
/// A store failure aborts the whole operation: callers propagate these
/// unmodified, with no retry and no partial-result fallback.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not complete the query.
    #[error("Store error in {operation}: {message}")]
    Query {
        operation: &'static str,
        message: String,
    },

    /// A stored record could not be decoded.
    #[error("Corrupt record {id}: {message}")]
    Corrupt { id: String, message: String },
}

impl StoreError {
    /// Create a Query error with operation context.
    pub fn query(operation: &'static str, message: impl ToString) -> Self {
        Self::Query {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Corrupt error for an undecodable record.
    pub fn corrupt(id: impl ToString, message: impl ToString) -> Self {
        Self::Corrupt {
            id: id.to_string(),
            message: message.to_string(),
        }
    }
}

/// Asynchronous, predicate-filterable query over typed records.
///
/// The entity store owns all record lifecycle; this port is read-only and
/// returns the full matching set in one call (no pagination).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStorePort: Send + Sync {
    /// All records of `entity_type` whose `attribute` equals `value`
    /// exactly (string equality, no normalization). Records missing the
    /// attribute never match.
    async fn find_by_attribute(
        &self,
        entity_type: &str,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<EntityRecord>, StoreError>;
}
