//! Entities handed back by the external record store.

mod narrative_event;
mod record;

pub use narrative_event::{NarrativeEvent, ATTR_SESSION_ID};
pub use record::{EntityRecord, NARRATIVE_EVENT_TYPE};
