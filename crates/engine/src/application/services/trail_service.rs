//! Trail Service - deterministic ordering of a session's narrative events
//!
//! Authors sequence events with explicit `leads_to` links, often out of
//! creation order (a flashback inserted retroactively still belongs where
//! its links put it), so link-based ordering takes precedence whenever it
//! fully resolves. Authored link data is also routinely broken - cycles
//! and orphaned back-references are expected - and the resolver must never
//! fail or hang on it: it degrades to chronological order instead.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument};

use chroniclr_domain::{
    DomainError, NarrativeEvent, RecordId, RelationshipKind, ATTR_SESSION_ID, NARRATIVE_EVENT_TYPE,
};

use crate::application::ports::outbound::RecordStorePort;

/// Trail service trait defining the ordering use case
#[async_trait]
pub trait TrailService: Send + Sync {
    /// Resolve the deterministic linear ordering of a session's events.
    ///
    /// `session_id` must be supplied; `None` is a caller defect and is
    /// rejected before any query is issued. An empty string is a valid
    /// session id that yields an empty trail.
    async fn get_trail(&self, session_id: Option<&str>) -> Result<Vec<NarrativeEvent>>;
}

/// Default implementation of [`TrailService`] backed by the record store
pub struct TrailServiceImpl {
    store: Arc<dyn RecordStorePort>,
}

impl TrailServiceImpl {
    /// Create a new TrailServiceImpl with the given record store
    pub fn new(store: Arc<dyn RecordStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TrailService for TrailServiceImpl {
    #[instrument(skip(self))]
    async fn get_trail(&self, session_id: Option<&str>) -> Result<Vec<NarrativeEvent>> {
        let session_id = session_id
            .ok_or_else(|| DomainError::validation("sessionId cannot be null or undefined"))?;

        // Store failures abort the call as-is: no retry, no wrapping.
        let records = self
            .store
            .find_by_attribute(NARRATIVE_EVENT_TYPE, ATTR_SESSION_ID, session_id)
            .await?;

        let events: Vec<NarrativeEvent> = records
            .iter()
            .filter_map(NarrativeEvent::from_record)
            .collect();

        if events.is_empty() {
            debug!(session_id, "No narrative events recorded for session");
            return Ok(events);
        }

        match resolve_by_links(&events) {
            Some(order) => {
                debug!(
                    session_id,
                    events = events.len(),
                    "Trail resolved from leads_to links"
                );
                Ok(reorder(events, &order))
            }
            None => {
                debug!(
                    session_id,
                    events = events.len(),
                    "Link graph did not fully resolve, falling back to chronological order"
                );
                Ok(sort_chronological(events))
            }
        }
    }
}

/// Attempt a relationship-based total order over `events`.
///
/// Builds the directed graph restricted to `leads_to` edges whose source
/// and target are both in the set (each distinct edge counted once, even
/// when both endpoint records carry it), then runs Kahn's algorithm over
/// an adjacency map plus an in-degree map. Among ready nodes the
/// lexicographically smallest id is always emitted first, so parallel
/// events order the same way no matter how the store returned them.
///
/// Returns `None` when a cycle prevents every node from being emitted.
fn resolve_by_links(events: &[NarrativeEvent]) -> Option<Vec<RecordId>> {
    let ids: HashSet<&RecordId> = events.iter().map(NarrativeEvent::id).collect();

    let mut edges: HashSet<(&RecordId, &RecordId)> = HashSet::new();
    for event in events {
        for link in event.links() {
            if link.kind != RelationshipKind::LeadsTo {
                continue;
            }
            // Edges reaching outside the session's event set carry no
            // ordering information.
            let (Some(&source), Some(&target)) =
                (ids.get(&link.source_id), ids.get(&link.target_id))
            else {
                continue;
            };
            edges.insert((source, target));
        }
    }

    let mut successors: HashMap<&RecordId, Vec<&RecordId>> = HashMap::new();
    let mut in_degree: HashMap<&RecordId, usize> =
        events.iter().map(|event| (event.id(), 0)).collect();
    for &(source, target) in &edges {
        successors.entry(source).or_default().push(target);
        if let Some(degree) = in_degree.get_mut(target) {
            *degree += 1;
        }
    }

    let mut ready: BinaryHeap<Reverse<&RecordId>> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(id, _)| Reverse(*id))
        .collect();

    let mut order: Vec<RecordId> = Vec::with_capacity(events.len());
    while let Some(Reverse(id)) = ready.pop() {
        order.push(id.clone());
        for &successor in successors.get(id).into_iter().flatten() {
            if let Some(degree) = in_degree.get_mut(successor) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(successor));
                }
            }
        }
    }

    (order.len() == events.len()).then_some(order)
}

/// Rearrange `events` to match the resolved id order.
fn reorder(events: Vec<NarrativeEvent>, order: &[RecordId]) -> Vec<NarrativeEvent> {
    let mut by_id: HashMap<RecordId, NarrativeEvent> = events
        .into_iter()
        .map(|event| (event.id().clone(), event))
        .collect();
    order.iter().filter_map(|id| by_id.remove(id)).collect()
}

/// Total, always-available fallback: oldest first. The sort is stable, so
/// events with equal timestamps (including the missing/malformed ones that
/// read as time zero) keep their queried order.
fn sort_chronological(mut events: Vec<NarrativeEvent>) -> Vec<NarrativeEvent> {
    events.sort_by_key(NarrativeEvent::created_at);
    events
}
