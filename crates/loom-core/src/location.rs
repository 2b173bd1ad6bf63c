use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a location in an adventure graph.
///
/// Ids are opaque strings: freshly generated ones are `loc_<uuid>`, but any
/// non-empty string from an imported adventure is valid. The empty id is
/// representable — it is how an unset choice destination is stored — and
/// simply never resolves to a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub String);

impl LocationId {
    /// Generate a new random location ID.
    pub fn generate() -> Self {
        Self(format!("loc_{}", Uuid::new_v4().simple()))
    }

    /// True if this ID is the empty (unset) id.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "(unset)")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a choice within its owning location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(pub String);

impl ChoiceId {
    /// Generate a new random choice ID.
    pub fn generate() -> Self {
        Self(format!("choice_{}", Uuid::new_v4().simple()))
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChoiceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A directed edge from its owning location to another location.
///
/// The destination may be empty or reference a nonexistent location; both are
/// valid stored states and surface as "leads nowhere" during playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Unique within the owning location's choice list.
    pub id: ChoiceId,
    /// Player-facing label for the edge.
    pub text: String,
    /// Target location ID. May be empty or dangling.
    #[serde(rename = "destinationId", default)]
    pub destination: LocationId,
    /// Item the player must hold for this choice to be offered.
    #[serde(
        rename = "requiresItem",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub requires_item: Option<String>,
}

impl Choice {
    /// Create a choice with placeholder text and no destination.
    pub fn new() -> Self {
        Self {
            id: ChoiceId::generate(),
            text: "A new path...".to_string(),
            destination: LocationId::default(),
            requires_item: None,
        }
    }

    /// The item gating this choice, if any. Stored empty strings (from
    /// free-text editing) count as no gate.
    pub fn gate(&self) -> Option<&str> {
        self.requires_item.as_deref().filter(|s| !s.is_empty())
    }
}

impl Default for Choice {
    fn default() -> Self {
        Self::new()
    }
}

/// A node in the adventure graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Stable identifier; the sole addressing mechanism for this location.
    pub id: LocationId,
    /// Display label, not required to be unique.
    pub name: String,
    /// Narrative text shown on arrival.
    pub description: String,
    /// Outgoing edges, rendered in insertion order.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// At most one location in a graph carries this flag.
    #[serde(rename = "isStart", default)]
    pub is_start: bool,
    /// Terminal flag: playback stops here and shows the finish message.
    #[serde(rename = "isFinish", default, skip_serializing_if = "is_false")]
    pub is_finish: bool,
    /// Text shown instead of the description when `is_finish` is set.
    #[serde(
        rename = "finishMessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub finish_message: Option<String>,
    /// Item granted to the player on arrival.
    #[serde(rename = "addsItem", default, skip_serializing_if = "Option::is_none")]
    pub adds_item: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Location {
    /// Create a location with a fresh ID and the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LocationId::generate(),
            name: name.into(),
            description: String::new(),
            choices: Vec::new(),
            is_start: false,
            is_finish: false,
            finish_message: None,
            adds_item: None,
        }
    }

    /// The item granted on arrival, if any. Stored empty strings count as no
    /// grant.
    pub fn grants(&self) -> Option<&str> {
        self.adds_item.as_deref().filter(|s| !s.is_empty())
    }

    /// Find a choice by ID.
    pub fn choice(&self, id: &ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == *id)
    }
}
