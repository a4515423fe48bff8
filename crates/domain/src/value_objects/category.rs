//! Narrative event categories and their prose descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of narrative event categories.
///
/// Stored `event_type` attributes parse leniently: anything outside the
/// known set, including a missing attribute, reads as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    Scene,
    Combat,
    Montage,
    Negotiation,
    #[default]
    Other,
}

impl EventCategory {
    fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "scene" => Self::Scene,
            "combat" => Self::Combat,
            "montage" => Self::Montage,
            "negotiation" => Self::Negotiation,
            _ => Self::Other,
        }
    }

    /// Prose descriptor used when narrating an event of this category.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Combat => "a combat encounter: ",
            Self::Montage => "a montage: ",
            Self::Scene => "a scene: ",
            Self::Negotiation | Self::Other => "an event: ",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::Combat => "combat",
            Self::Montage => "montage",
            Self::Negotiation => "negotiation",
            Self::Other => "other",
        }
    }
}

impl FromStr for EventCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for EventCategory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<EventCategory> for String {
    fn from(value: EventCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        assert_eq!(EventCategory::parse("scene"), EventCategory::Scene);
        assert_eq!(EventCategory::parse("Combat"), EventCategory::Combat);
        assert_eq!(EventCategory::parse(" montage "), EventCategory::Montage);
        assert_eq!(EventCategory::parse("negotiation"), EventCategory::Negotiation);
    }

    #[test]
    fn unknown_spellings_read_as_other() {
        assert_eq!(EventCategory::parse("downtime"), EventCategory::Other);
        assert_eq!(EventCategory::parse(""), EventCategory::Other);
        assert_eq!(EventCategory::default(), EventCategory::Other);
    }

    #[test]
    fn descriptors_cover_every_category() {
        assert_eq!(EventCategory::Combat.descriptor(), "a combat encounter: ");
        assert_eq!(EventCategory::Montage.descriptor(), "a montage: ");
        assert_eq!(EventCategory::Scene.descriptor(), "a scene: ");
        assert_eq!(EventCategory::Negotiation.descriptor(), "an event: ");
        assert_eq!(EventCategory::Other.descriptor(), "an event: ");
    }
}
