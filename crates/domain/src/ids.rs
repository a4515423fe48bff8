use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a record in the entity store.
///
/// The store hands back opaque string identifiers and never guarantees a
/// particular shape, so the newtype wraps the raw text. Records authored
/// by this application receive uuid v4 identifiers via [`RecordId::generate`].
///
/// Ordering is lexicographic over the raw text; deterministic tie-breaking
/// in the trail resolver depends on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint an identifier for a newly authored record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        let mut ids = vec![
            RecordId::new("event-10"),
            RecordId::new("event-2"),
            RecordId::new("event-1"),
        ];
        ids.sort();
        assert_eq!(
            ids.iter().map(RecordId::as_str).collect::<Vec<_>>(),
            vec!["event-1", "event-10", "event-2"]
        );
    }

    #[test]
    fn generate_produces_distinct_ids() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }

    #[test]
    fn display_matches_raw_text() {
        assert_eq!(RecordId::new("scene-3").to_string(), "scene-3");
    }
}
