//! Generic typed records from the external entity store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::RecordId;
use crate::value_objects::EventLink;

/// Entity type tag carried by narrative event records.
pub const NARRATIVE_EVENT_TYPE: &str = "narrative_event";

/// A generic typed record as returned by the entity store.
///
/// The store persists arbitrary entity types (characters, locations,
/// scenes, narrative events, ...) behind a free-form attribute bag. This
/// crate only ever reads records; creation, edits, and deletion belong
/// entirely to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: RecordId,
    pub entity_type: String,
    /// Free-form attribute bag. The keys the trail core reads:
    /// `session_id`, `event_type`, `outcome`, `name`, `description`.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Raw RFC3339 creation timestamp as stored. Authored data may leave
    /// it absent or malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Directed relationship edges attached to this record. Unordered,
    /// and free to reference ids outside any given query result.
    #[serde(default)]
    pub links: Vec<EventLink>,
}

impl EntityRecord {
    pub fn new(id: impl Into<RecordId>, entity_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            attributes: Map::new(),
            created_at: None,
            links: Vec::new(),
        }
    }

    /// Set an attribute on the record.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the raw creation timestamp.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Attach a relationship edge.
    pub fn with_link(mut self, link: EventLink) -> Self {
        self.links.push(link);
        self
    }

    /// Read an attribute as a string slice.
    ///
    /// Returns `None` when the attribute is absent or holds a non-string
    /// value; attribute bags are authored data and carry no schema.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}
