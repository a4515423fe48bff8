//! In-memory record store for development and testing
//!
//! Backs the record store port with a Vec behind an async RwLock. It does
//! not persist data; the production entity store lives outside this
//! repository and is reached through the same port.

use async_trait::async_trait;
use tokio::sync::RwLock;

use chroniclr_domain::EntityRecord;

use crate::application::ports::outbound::{RecordStorePort, StoreError};

/// In-memory record store implementation
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<EntityRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the store. Insertion order is preserved and is the
    /// order queries return matches in.
    pub async fn insert(&self, record: EntityRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl RecordStorePort for InMemoryRecordStore {
    async fn find_by_attribute(
        &self,
        entity_type: &str,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<EntityRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| record.entity_type == entity_type)
            .filter(|record| record.attribute_str(attribute) == Some(value))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroniclr_domain::{ATTR_SESSION_ID, NARRATIVE_EVENT_TYPE};

    fn narrative_record(id: &str, session: &str) -> EntityRecord {
        EntityRecord::new(id, NARRATIVE_EVENT_TYPE).with_attribute(ATTR_SESSION_ID, session)
    }

    #[tokio::test]
    async fn matches_on_type_and_exact_attribute_value() {
        let store = InMemoryRecordStore::new();
        store.insert(narrative_record("ev-1", "session-1")).await;
        store.insert(narrative_record("ev-2", "session-2")).await;
        store
            .insert(EntityRecord::new("loc-1", "location").with_attribute(ATTR_SESSION_ID, "session-1"))
            .await;

        let matches = store
            .find_by_attribute(NARRATIVE_EVENT_TYPE, ATTR_SESSION_ID, "session-1")
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id.as_str(), "ev-1");
    }

    #[tokio::test]
    async fn no_normalization_is_applied() {
        let store = InMemoryRecordStore::new();
        store.insert(narrative_record("ev-1", "Session-1")).await;
        store.insert(narrative_record("ev-2", " session-1")).await;

        let matches = store
            .find_by_attribute(NARRATIVE_EVENT_TYPE, ATTR_SESSION_ID, "session-1")
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn records_missing_the_attribute_never_match() {
        let store = InMemoryRecordStore::new();
        store
            .insert(EntityRecord::new("ev-1", NARRATIVE_EVENT_TYPE))
            .await;

        let matches = store
            .find_by_attribute(NARRATIVE_EVENT_TYPE, ATTR_SESSION_ID, "")
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let store = InMemoryRecordStore::new();
        for id in ["ev-3", "ev-1", "ev-2"] {
            store.insert(narrative_record(id, "session-1")).await;
        }

        let matches = store
            .find_by_attribute(NARRATIVE_EVENT_TYPE, ATTR_SESSION_ID, "session-1")
            .await
            .unwrap();
        let ids: Vec<&str> = matches.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ev-3", "ev-1", "ev-2"]);
    }
}
