//! Directed relationship edges between stored records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;

/// A directed relationship edge between two records.
///
/// Edges live in a record's unordered link collection; an edge between A
/// and B may be stored on either endpoint (or on both), and may reference
/// ids that are not part of any given query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLink {
    pub source_id: RecordId,
    pub target_id: RecordId,
    pub kind: RelationshipKind,
    /// Whether the edge reads in both directions for display purposes.
    #[serde(default)]
    pub bidirectional: bool,
}

impl EventLink {
    pub fn new(
        source_id: impl Into<RecordId>,
        target_id: impl Into<RecordId>,
        kind: RelationshipKind,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            kind,
            bidirectional: false,
        }
    }
}

/// Relationship vocabulary between narrative records.
///
/// `LeadsTo` expresses narrative sequence (the source precedes the
/// target); `Follows` is its semantic inverse. Unknown spellings in
/// authored data become `Custom` so loads never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipKind {
    LeadsTo,
    Follows,
    Involves,
    OccursAt,
    Custom(String),
}

impl RelationshipKind {
    /// Parse a relationship kind from its stored form (case-insensitive)
    ///
    /// Supports:
    /// - Sequence kinds: "leads_to", "follows"
    /// - Cross-entity kinds: "involves" (alias "features"), "occurs_at"
    /// - Unknown values become Custom(original_string)
    fn parse(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "leads_to" | "leadsto" => Self::LeadsTo,
            "follows" => Self::Follows,
            "involves" | "features" => Self::Involves,
            "occurs_at" | "occursat" => Self::OccursAt,
            _ => Self::Custom(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::LeadsTo => "leads_to",
            Self::Follows => "follows",
            Self::Involves => "involves",
            Self::OccursAt => "occurs_at",
            Self::Custom(raw) => raw,
        }
    }
}

impl FromStr for RelationshipKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for RelationshipKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<RelationshipKind> for String {
    fn from(value: RelationshipKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
