//! NarrativeEvent - read view over `narrative_event` records
//!
//! Narrative events are stored as generic records; this view projects one
//! into display-ready values at query time. Events are immutable inputs
//! to the trail subsystem: it never mutates or persists them, so the view
//! owns plain data and exposes read accessors only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::parse_datetime_or;
use crate::entities::record::EntityRecord;
use crate::ids::RecordId;
use crate::value_objects::{EventCategory, EventLink};

/// Attribute naming the owning session. Absence means the record is not
/// part of any session.
pub const ATTR_SESSION_ID: &str = "session_id";

const ATTR_EVENT_TYPE: &str = "event_type";
const ATTR_OUTCOME: &str = "outcome";
const ATTR_NAME: &str = "name";
const ATTR_DESCRIPTION: &str = "description";

/// An immutable view over one narrative event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeEvent {
    id: RecordId,
    session_id: String,
    category: EventCategory,
    outcome: Option<String>,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    links: Vec<EventLink>,
}

impl NarrativeEvent {
    /// Project a store record into the narrative event view.
    ///
    /// Returns `None` when the record carries no `session_id` attribute:
    /// such a record belongs to no session and can never appear on a
    /// trail. Every other attribute degrades instead of failing - a
    /// missing or unknown `event_type` reads as [`EventCategory::Other`],
    /// missing display strings read as empty, and an absent or malformed
    /// `created_at` becomes the Unix epoch so it sorts earliest.
    pub fn from_record(record: &EntityRecord) -> Option<Self> {
        let session_id = record.attribute_str(ATTR_SESSION_ID)?.to_string();
        Some(Self {
            id: record.id.clone(),
            session_id,
            category: record
                .attribute_str(ATTR_EVENT_TYPE)
                .map(|s| EventCategory::from(s.to_string()))
                .unwrap_or_default(),
            outcome: record.attribute_str(ATTR_OUTCOME).map(str::to_string),
            name: record.attribute_str(ATTR_NAME).unwrap_or_default().to_string(),
            description: record
                .attribute_str(ATTR_DESCRIPTION)
                .unwrap_or_default()
                .to_string(),
            created_at: record
                .created_at
                .as_deref()
                .map(|raw| parse_datetime_or(raw, DateTime::<Utc>::UNIX_EPOCH))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            links: record.links.clone(),
        })
    }

    /// Returns the event's record identifier.
    #[inline]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the id of the session this event belongs to.
    #[inline]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the event's narrative category.
    #[inline]
    pub fn category(&self) -> EventCategory {
        self.category
    }

    /// Returns how the event resolved, if recorded.
    #[inline]
    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }

    /// Returns the event's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the event's display description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the event was created, used as the ordering fallback.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the relationship edges attached to the underlying record.
    #[inline]
    pub fn links(&self) -> &[EventLink] {
        &self.links
    }
}
