//! Summary Service - prose narration of a resolved session trail
//!
//! Rendering is table-driven: transition phrases and category descriptors
//! live in lookup tables so the wording policy can be audited and extended
//! without touching control flow.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument};

use chroniclr_domain::NarrativeEvent;

use crate::application::services::trail_service::TrailService;

/// Fixed wording returned for a session with no recorded events.
const EMPTY_SESSION_SUMMARY: &str = "No events recorded for this session.";

const OPENING_PHRASE: &str = "The session began with ";
const CLOSING_PHRASE: &str = "The session concluded with ";

/// Transition phrases for events that neither open nor close the session,
/// cycled in order so a given event sequence always words the same way.
const TRANSITION_PHRASES: [&str; 5] = [
    "Following this, ",
    "Then, ",
    "Next, ",
    "After that, ",
    "Subsequently, ",
];

/// Summary service trait defining the narration use case
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Resolve the session's trail and render it as prose.
    ///
    /// Fails for a missing `session_id` exactly as
    /// [`TrailService::get_trail`] does, before any query is issued.
    async fn generate_summary(&self, session_id: Option<&str>) -> Result<String>;
}

/// Default implementation of [`SummaryService`] over a [`TrailService`]
pub struct SummaryServiceImpl {
    trail: Arc<dyn TrailService>,
}

impl SummaryServiceImpl {
    /// Create a new SummaryServiceImpl with the given trail service
    pub fn new(trail: Arc<dyn TrailService>) -> Self {
        Self { trail }
    }
}

#[async_trait]
impl SummaryService for SummaryServiceImpl {
    #[instrument(skip(self))]
    async fn generate_summary(&self, session_id: Option<&str>) -> Result<String> {
        let trail = self.trail.get_trail(session_id).await?;
        debug!(events = trail.len(), "Composing session summary");
        Ok(compose(&trail))
    }
}

/// Render an ordered trail as a single prose paragraph.
///
/// Pure over its input: the same sequence always produces the same text.
pub fn compose(trail: &[NarrativeEvent]) -> String {
    if trail.is_empty() {
        return EMPTY_SESSION_SUMMARY.to_string();
    }

    let segments: Vec<String> = trail
        .iter()
        .enumerate()
        .map(|(position, event)| compose_segment(event, position, trail.len()))
        .collect();
    segments.join(" ")
}

fn compose_segment(event: &NarrativeEvent, position: usize, total: usize) -> String {
    // A lone event is an opening, never a conclusion: "began with" reads
    // naturally on its own, "concluded with" would not.
    let phrase = if position == 0 {
        OPENING_PHRASE
    } else if position + 1 == total {
        CLOSING_PHRASE
    } else {
        TRANSITION_PHRASES[(position - 1) % TRANSITION_PHRASES.len()]
    };

    let mut segment = String::new();
    segment.push_str(phrase);
    segment.push_str(event.category().descriptor());
    segment.push_str(event.name());
    match event.outcome() {
        Some(outcome) if !outcome.is_empty() => {
            segment.push_str(". Outcome: ");
            segment.push_str(&title_case(outcome));
        }
        _ => {}
    }
    segment.push('.');
    segment
}

/// snake_case (or free text) to Title Case: underscores become spaces and
/// the first letter of every word is upper-cased, the rest kept verbatim.
fn title_case(outcome: &str) -> String {
    let spaced = outcome.replace('_', " ");
    spaced
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
