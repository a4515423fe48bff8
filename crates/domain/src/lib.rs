//! Chroniclr Domain - core types for the campaign entity model.
//!
//! This crate holds the pure domain vocabulary shared across Chroniclr:
//! the generic typed records the entity store hands back, the narrative
//! event view built over them, and the value objects (relationship kinds,
//! event categories) the rest of the application reads. No I/O lives here.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{EntityRecord, NarrativeEvent, ATTR_SESSION_ID, NARRATIVE_EVENT_TYPE};
pub use error::DomainError;
pub use ids::RecordId;
pub use value_objects::{EventCategory, EventLink, RelationshipKind};
