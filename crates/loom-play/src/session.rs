//! The session state machine and its render view.

use std::fmt;

use loom_core::{AdventureGraph, Choice, ChoiceId, Location, LocationId};

use crate::error::{PlayError, PlayResult};
use crate::player::PlayerState;

/// Shown when playback starts against a graph with no locations.
pub const NO_CONTENT_MESSAGE: &str = "No locations have been created for this game yet.";

/// Shown when a chosen path has an empty or dangling destination.
pub const DEAD_END_NOTICE: &str = "This path leads nowhere... (Destination not set).";

/// Shown at a finish location that has no finish message of its own.
pub const DEFAULT_FINISH_MESSAGE: &str = "The end.";

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// `start` has not been called yet.
    #[default]
    NotStarted,
    /// The player is at a location and may be offered choices.
    AtLocation(LocationId),
    /// The player reached a finish location.
    Ended(LocationId),
    /// The graph had no locations when `start` ran.
    NoContent,
}

/// A transient player-facing message, such as the dead-end notice.
///
/// The session holds at most one notice and clears it on the next successful
/// transition. A host that wants the original timed behavior can additionally
/// clear its rendering of the notice after a few seconds; the session itself
/// stays synchronous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The message to show.
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// What the host should render right now.
///
/// Borrows only from the graph, so a host can hold a scene while it mutates
/// the session (restart, choose) in response to player input.
#[derive(Debug)]
pub enum Scene<'g> {
    /// Playback has not started.
    NotStarted,
    /// Nothing to play: an empty graph, or the current location was deleted
    /// out from under the session.
    Empty {
        /// The message to show instead of a location.
        message: String,
    },
    /// The player is at a location.
    At {
        /// The current location.
        location: &'g Location,
        /// The offered choices, in storage order, gates already applied.
        choices: Vec<&'g Choice>,
        /// A pending transient notice, if any.
        notice: Option<Notice>,
    },
    /// The playthrough ended at a finish location.
    Finished {
        /// The finish location.
        location: &'g Location,
        /// Its finish message, or the default.
        message: &'g str,
    },
}

/// A playback session over an adventure graph.
///
/// The session owns only player-side state. Every transition takes the live
/// graph, re-resolving location and choices at that moment — editing the
/// graph between transitions never teleports the player, and a restart
/// always recomputes the start location from the graph as it is now.
#[derive(Debug, Clone, Default)]
pub struct PlaySession {
    phase: Phase,
    player: PlayerState,
    notice: Option<Notice>,
}

impl PlaySession {
    /// Create a session that has not started yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The player's inventory state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The pending transient notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True once a finish location has been reached.
    pub fn has_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    /// Begin (or restart) a playthrough.
    ///
    /// Resets inventory and notices, then resolves the start location from
    /// the live graph: the location flagged as start, else the deterministic
    /// fallback (smallest ID), else [`Phase::NoContent`] for an empty graph.
    /// Arrival effects apply immediately, so a start location that grants an
    /// item grants it here, and a start location flagged as finish ends the
    /// playthrough on the spot.
    pub fn start(&mut self, graph: &AdventureGraph) {
        self.player.reset();
        self.notice = None;
        self.phase = Phase::NotStarted;

        let start = graph.start_location().or_else(|| graph.fallback_start());
        match start {
            Some(location) => {
                let id = location.id.clone();
                self.arrive(graph, id);
            }
            None => {
                self.phase = Phase::NoContent;
            }
        }
    }

    /// The choices currently offered to the player: the current location's
    /// choices in storage order, minus any whose item gate is unmet. Gated
    /// choices are hidden entirely, never shown disabled. Always empty when
    /// the playthrough has ended or the current location is a finish.
    pub fn offered_choices<'a>(&self, graph: &'a AdventureGraph) -> Vec<&'a Choice> {
        let Phase::AtLocation(ref id) = self.phase else {
            return Vec::new();
        };
        let Some(location) = graph.location(id) else {
            return Vec::new();
        };
        if location.is_finish {
            return Vec::new();
        }
        location
            .choices
            .iter()
            .filter(|c| match c.gate() {
                Some(item) => self.player.has_item(item),
                None => true,
            })
            .collect()
    }

    /// Follow one of the offered choices.
    ///
    /// A resolvable destination moves the player there (which may immediately
    /// end the playthrough at a finish location). An empty or dangling
    /// destination leaves the player where they are and raises the dead-end
    /// notice. Selecting a choice that is not currently offered is a caller
    /// error.
    pub fn choose(&mut self, graph: &AdventureGraph, choice_id: &ChoiceId) -> PlayResult<()> {
        if !matches!(self.phase, Phase::AtLocation(_)) {
            return Err(PlayError::NotAtLocation);
        }

        let destination = self
            .offered_choices(graph)
            .into_iter()
            .find(|c| c.id == *choice_id)
            .map(|c| c.destination.clone())
            .ok_or_else(|| PlayError::ChoiceNotOffered(choice_id.clone()))?;

        if graph.contains(&destination) {
            self.arrive(graph, destination);
        } else {
            self.notice = Some(Notice {
                message: DEAD_END_NOTICE.to_string(),
            });
        }
        Ok(())
    }

    /// What the host should render right now, resolved against the live
    /// graph.
    pub fn scene<'g>(&self, graph: &'g AdventureGraph) -> Scene<'g> {
        match &self.phase {
            Phase::NotStarted => Scene::NotStarted,
            Phase::NoContent => Scene::Empty {
                message: NO_CONTENT_MESSAGE.to_string(),
            },
            Phase::AtLocation(id) => match graph.location(id) {
                Some(location) => Scene::At {
                    location,
                    choices: self.offered_choices(graph),
                    notice: self.notice.clone(),
                },
                None => Scene::Empty {
                    message: format!("The location {id} no longer exists."),
                },
            },
            Phase::Ended(id) => match graph.location(id) {
                Some(location) => Scene::Finished {
                    location,
                    message: location.finish_message.as_deref().unwrap_or(DEFAULT_FINISH_MESSAGE),
                },
                None => Scene::Empty {
                    message: format!("The location {id} no longer exists."),
                },
            },
        }
    }

    /// Arrival transition: grant the location's item (idempotently), clear
    /// any pending notice, and end the playthrough if the location is a
    /// finish.
    fn arrive(&mut self, graph: &AdventureGraph, id: LocationId) {
        self.notice = None;
        let Some(location) = graph.location(&id) else {
            self.phase = Phase::AtLocation(id);
            return;
        };
        if let Some(item) = location.grants() {
            self.player.grant(item);
        }
        self.phase = if location.is_finish {
            Phase::Ended(id)
        } else {
            Phase::AtLocation(id)
        };
    }
}
