//! Non-fatal authoring diagnostics.
//!
//! None of these block any operation — an adventure mid-edit is expected to
//! be incomplete. The `check` command surfaces them so authors can find
//! unfinished paths before handing the adventure to a player.

use std::collections::BTreeSet;
use std::fmt;

use crate::graph::AdventureGraph;
use crate::location::{ChoiceId, LocationId};

/// A single authoring warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// No location carries the start flag; playback will fall back to the
    /// smallest location ID.
    NoStart,
    /// A choice points at a location ID that does not exist.
    DanglingDestination {
        /// Owning location.
        location: LocationId,
        /// The offending choice.
        choice: ChoiceId,
    },
    /// A choice has no destination set.
    UnsetDestination {
        /// Owning location.
        location: LocationId,
        /// The offending choice.
        choice: ChoiceId,
    },
    /// A finish location still carries stored choices (possible in imported
    /// data; playback ignores them).
    FinishHasChoices {
        /// The finish location.
        location: LocationId,
    },
    /// A location cannot be reached from the start by any choice, gated or
    /// not.
    UnreachableLocation {
        /// The stranded location.
        location: LocationId,
    },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStart => {
                write!(f, "no start location is set; playback will pick one")
            }
            Self::DanglingDestination { location, choice } => write!(
                f,
                "choice {choice} at {location} points at a location that does not exist"
            ),
            Self::UnsetDestination { location, choice } => {
                write!(f, "choice {choice} at {location} has no destination")
            }
            Self::FinishHasChoices { location } => write!(
                f,
                "finish location {location} still has choices; they will never be offered"
            ),
            Self::UnreachableLocation { location } => {
                write!(f, "location {location} is unreachable from the start")
            }
        }
    }
}

/// Walk the graph and report everything an author probably wants to fix.
pub fn lint(graph: &AdventureGraph) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    if !graph.is_empty() && graph.start_location().is_none() {
        warnings.push(LintWarning::NoStart);
    }

    for location in graph.locations() {
        if location.is_finish && !location.choices.is_empty() {
            warnings.push(LintWarning::FinishHasChoices {
                location: location.id.clone(),
            });
        }
        for choice in &location.choices {
            if choice.destination.is_empty() {
                warnings.push(LintWarning::UnsetDestination {
                    location: location.id.clone(),
                    choice: choice.id.clone(),
                });
            } else if !graph.contains(&choice.destination) {
                warnings.push(LintWarning::DanglingDestination {
                    location: location.id.clone(),
                    choice: choice.id.clone(),
                });
            }
        }
    }

    for id in unreachable(graph) {
        warnings.push(LintWarning::UnreachableLocation { location: id });
    }

    warnings
}

/// Locations not reachable from the (possibly fallback) start via any choice.
fn unreachable(graph: &AdventureGraph) -> Vec<LocationId> {
    let Some(start) = graph.start_location().or_else(|| graph.fallback_start()) else {
        return Vec::new();
    };

    let mut seen: BTreeSet<LocationId> = BTreeSet::new();
    let mut stack = vec![start.id.clone()];
    while let Some(id) = stack.pop() {
        if !seen.insert(id.clone()) {
            continue;
        }
        if let Some(location) = graph.location(&id) {
            for choice in &location.choices {
                if graph.contains(&choice.destination) && !seen.contains(&choice.destination) {
                    stack.push(choice.destination.clone());
                }
            }
        }
    }

    graph
        .locations()
        .filter(|l| !seen.contains(&l.id))
        .map(|l| l.id.clone())
        .collect()
}
