use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GraphError, GraphResult};
use crate::graph::AdventureGraph;
use crate::location::{Choice, ChoiceId, Location, LocationId};

/// Host-local identifier for an adventure. Assigned at creation or import
/// time and never part of the portable format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdventureId(pub String);

impl AdventureId {
    /// Generate a new random adventure ID.
    pub fn generate() -> Self {
        Self(format!("adv_{}", Uuid::new_v4().simple()))
    }
}

impl fmt::Display for AdventureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named adventure graph: the unit of save and load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adventure {
    /// Host-local identifier.
    pub id: AdventureId,
    /// Author-facing title.
    pub title: String,
    /// The adventure graph.
    #[serde(rename = "gameData")]
    pub game_data: AdventureGraph,
}

impl Adventure {
    /// Create an empty adventure with a fresh ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: AdventureId::generate(),
            title: title.into(),
            game_data: AdventureGraph::new(),
        }
    }

    /// Rebuild an adventure from its portable form, assigning a fresh
    /// host-local ID.
    pub fn from_export(export: AdventureExport) -> Self {
        Self {
            id: AdventureId::generate(),
            title: export.title,
            game_data: export.game_data,
        }
    }

    /// Parse an adventure from its stored JSON. Shape failures are reported
    /// as [`GraphError::MalformedImport`] with nothing partially applied.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::MalformedImport(e.to_string()))
    }

    /// Serialize to pretty JSON for file storage.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// The bundled demo adventure: four locations, one item-gated path.
    pub fn sample() -> Self {
        let crossroads = LocationId::from("loc_crossroads");
        let forest = LocationId::from("loc_forest");
        let house = LocationId::from("loc_house");
        let hallway = LocationId::from("loc_hallway");

        let mut graph = AdventureGraph::new();
        graph.insert(Location {
            id: crossroads.clone(),
            name: "The Crossroads".to_string(),
            description: "You stand at a dusty crossroads under a pale sky. To your left, \
                          a dark forest looms, whispering secrets on the wind. To your right, \
                          a derelict house stands silently against the horizon, its windows \
                          like vacant eyes."
                .to_string(),
            choices: vec![
                Choice {
                    id: ChoiceId::from("choice_forest"),
                    text: "Enter the Whispering Forest".to_string(),
                    destination: forest.clone(),
                    requires_item: None,
                },
                Choice {
                    id: ChoiceId::from("choice_house"),
                    text: "Approach the Decrepit House".to_string(),
                    destination: house.clone(),
                    requires_item: None,
                },
            ],
            is_start: true,
            is_finish: false,
            finish_message: None,
            adds_item: None,
        });
        graph.insert(Location {
            id: forest.clone(),
            name: "Whispering Forest".to_string(),
            description: "The trees murmur as you step into the shadows. Sunlight struggles \
                          to pierce the thick canopy above. You notice something glinting \
                          under the gnarled root of an ancient oak."
                .to_string(),
            choices: vec![Choice {
                id: ChoiceId::from("choice_forest_back"),
                text: "Go back to the crossroads".to_string(),
                destination: crossroads.clone(),
                requires_item: None,
            }],
            is_start: false,
            is_finish: false,
            finish_message: None,
            adds_item: Some("Rusty Key".to_string()),
        });
        graph.insert(Location {
            id: house.clone(),
            name: "Decrepit House".to_string(),
            description: "The house groans with the wind. The front door is made of heavy, \
                          splintered wood and is fitted with a large, ornate lock, rusted \
                          with age."
                .to_string(),
            choices: vec![
                Choice {
                    id: ChoiceId::from("choice_door"),
                    text: "Try the locked door".to_string(),
                    destination: hallway.clone(),
                    requires_item: Some("Rusty Key".to_string()),
                },
                Choice {
                    id: ChoiceId::from("choice_house_back"),
                    text: "Return to the crossroads".to_string(),
                    destination: crossroads.clone(),
                    requires_item: None,
                },
            ],
            is_start: false,
            is_finish: false,
            finish_message: None,
            adds_item: None,
        });
        graph.insert(Location {
            id: hallway,
            name: "Dusty Hallway".to_string(),
            description: "The rusty key turns with a loud, grating CLICK! The heavy door \
                          swings open into a long, dark hallway filled with cobwebs and the \
                          smell of decay. You have found a way inside."
                .to_string(),
            choices: Vec::new(),
            is_start: false,
            is_finish: true,
            finish_message: Some(
                "Congratulations! You unlocked the door and uncovered the first secret of \
                 the house. Your adventure has just begun!"
                    .to_string(),
            ),
            adds_item: None,
        });

        Self {
            id: AdventureId::generate(),
            title: "The Key and the Door (Example)".to_string(),
            game_data: graph,
        }
    }
}

/// The portable adventure format: title and graph, no host-local ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdventureExport {
    /// Author-facing title.
    pub title: String,
    /// The adventure graph.
    #[serde(rename = "gameData")]
    pub game_data: AdventureGraph,
}

impl AdventureExport {
    /// Parse a portable adventure from JSON, validating its shape. Rejects
    /// payloads missing `title` or `gameData`, or with extra top-level
    /// fields, without partial import.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::MalformedImport(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<&Adventure> for AdventureExport {
    fn from(adventure: &Adventure) -> Self {
        Self {
            title: adventure.title.clone(),
            game_data: adventure.game_data.clone(),
        }
    }
}
