use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::location::{Choice, ChoiceId, Location, LocationId};

/// Which field of a [`Choice`] an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceField {
    /// The player-facing label.
    Text,
    /// The destination location ID.
    Destination,
    /// The item gate.
    RequiresItem,
}

/// A field-level edit to a location. `None` fields are left unchanged.
///
/// There is deliberately no `is_start` field — the single-start invariant is
/// owned by [`AdventureGraph::set_start`].
#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    /// New display name.
    pub name: Option<String>,
    /// New narrative description.
    pub description: Option<String>,
    /// Set or clear the terminal flag. Setting it clears the location's
    /// choices.
    pub is_finish: Option<bool>,
    /// New finish message. An empty string clears it.
    pub finish_message: Option<String>,
    /// New arrival item grant. An empty string clears it.
    pub adds_item: Option<String>,
    /// Wholesale replacement of the choice list.
    pub choices: Option<Vec<Choice>>,
}

/// The full adventure graph: a map from location ID to location.
///
/// The graph is defined purely by the per-location choice lists; destinations
/// may freely form cycles, unreachable subgraphs, or dangling references.
/// None of that is rejected at edit time — authors are often mid-edit with an
/// intentionally incomplete graph. Malformation only surfaces through
/// [`lint`](crate::lint) and during playback.
///
/// Backed by a `BTreeMap` so iteration order (and therefore the fallback
/// start location) is deterministic: lexicographically smallest ID first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdventureGraph {
    locations: BTreeMap<LocationId, Location>,
}

impl AdventureGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// Get a location by ID. The empty ID never resolves.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// True if a location with this ID exists.
    pub fn contains(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    /// Iterate over all locations in ID order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// True if the graph has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The location flagged as start, if any.
    pub fn start_location(&self) -> Option<&Location> {
        self.locations.values().find(|l| l.is_start)
    }

    /// Degraded start for graphs with no start flag: the location with the
    /// lexicographically smallest ID.
    pub fn fallback_start(&self) -> Option<&Location> {
        self.locations.values().next()
    }

    /// The distinct set of all items granted anywhere in the graph, for use
    /// as an editing-time reference list. Empty strings are excluded.
    pub fn items(&self) -> BTreeSet<String> {
        self.locations
            .values()
            .filter_map(|l| l.grants())
            .map(str::to_string)
            .collect()
    }

    // -----------------------------------------------------------------------
    // Location mutators
    // -----------------------------------------------------------------------

    /// Insert a new location with a default name and empty content. The new
    /// location becomes the start iff the graph was previously empty.
    /// Returns the new location's ID.
    pub fn add_location(&mut self) -> LocationId {
        let mut location = Location::new("New Location");
        location.is_start = self.locations.is_empty();
        let id = location.id.clone();
        self.locations.insert(id.clone(), location);
        id
    }

    /// Insert a fully-formed location, e.g. from a sample or a generator.
    /// The single-start invariant is enforced: if the incoming location is
    /// flagged start, every other location's flag is cleared.
    pub fn insert(&mut self, location: Location) -> LocationId {
        let id = location.id.clone();
        let make_start = location.is_start;
        self.locations.insert(id.clone(), location);
        if make_start {
            for (lid, l) in self.locations.iter_mut() {
                l.is_start = *lid == id;
            }
        }
        id
    }

    /// Remove a location and cascade-remove every choice anywhere in the
    /// graph whose destination was that location. Dangling references that
    /// predate the removal (pointing at IDs that never existed) are left
    /// alone. Returns the removed location.
    pub fn remove_location(&mut self, id: &LocationId) -> GraphResult<Location> {
        let removed = self
            .locations
            .remove(id)
            .ok_or_else(|| GraphError::LocationNotFound(id.clone()))?;

        for location in self.locations.values_mut() {
            location.choices.retain(|c| c.destination != *id);
        }

        Ok(removed)
    }

    /// Flag a location as the start, clearing the flag on all others in the
    /// same pass.
    pub fn set_start(&mut self, id: &LocationId) -> GraphResult<()> {
        if !self.locations.contains_key(id) {
            return Err(GraphError::LocationNotFound(id.clone()));
        }
        for (lid, location) in self.locations.iter_mut() {
            location.is_start = lid == id;
        }
        Ok(())
    }

    /// Apply a field-level patch to a location.
    ///
    /// When the patch turns `is_finish` on, the location's choices are
    /// cleared here, at the point of mutation. Stored data that reaches us
    /// with both a finish flag and choices (hand-edited imports) is tolerated
    /// and handled at playback time instead.
    pub fn update_location(&mut self, id: &LocationId, patch: LocationPatch) -> GraphResult<()> {
        let location = self
            .locations
            .get_mut(id)
            .ok_or_else(|| GraphError::LocationNotFound(id.clone()))?;

        if let Some(name) = patch.name {
            location.name = name;
        }
        if let Some(description) = patch.description {
            location.description = description;
        }
        if let Some(choices) = patch.choices {
            location.choices = choices;
        }
        if let Some(message) = patch.finish_message {
            location.finish_message = non_empty(message);
        }
        if let Some(item) = patch.adds_item {
            location.adds_item = non_empty(item);
        }
        if let Some(is_finish) = patch.is_finish {
            location.is_finish = is_finish;
            if is_finish {
                location.choices.clear();
            }
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Choice mutators
    // -----------------------------------------------------------------------

    /// Append a new choice with placeholder text and no destination to a
    /// location's choice list. Returns the new choice's ID.
    pub fn add_choice(&mut self, location_id: &LocationId) -> GraphResult<ChoiceId> {
        let location = self
            .locations
            .get_mut(location_id)
            .ok_or_else(|| GraphError::LocationNotFound(location_id.clone()))?;
        let choice = Choice::new();
        let id = choice.id.clone();
        location.choices.push(choice);
        Ok(id)
    }

    /// Edit one field of one choice. Destination values are stored as given,
    /// dangling or empty included; item gates normalize empty to none.
    pub fn update_choice(
        &mut self,
        location_id: &LocationId,
        choice_id: &ChoiceId,
        field: ChoiceField,
        value: &str,
    ) -> GraphResult<()> {
        let choice = self.choice_mut(location_id, choice_id)?;
        match field {
            ChoiceField::Text => choice.text = value.to_string(),
            ChoiceField::Destination => choice.destination = LocationId(value.to_string()),
            ChoiceField::RequiresItem => choice.requires_item = non_empty(value.to_string()),
        }
        Ok(())
    }

    /// Remove one choice from one location's list.
    pub fn remove_choice(
        &mut self,
        location_id: &LocationId,
        choice_id: &ChoiceId,
    ) -> GraphResult<()> {
        let location = self
            .locations
            .get_mut(location_id)
            .ok_or_else(|| GraphError::LocationNotFound(location_id.clone()))?;
        let before = location.choices.len();
        location.choices.retain(|c| c.id != *choice_id);
        if location.choices.len() == before {
            return Err(GraphError::ChoiceNotFound {
                location: location_id.clone(),
                choice: choice_id.clone(),
            });
        }
        Ok(())
    }

    fn choice_mut(
        &mut self,
        location_id: &LocationId,
        choice_id: &ChoiceId,
    ) -> GraphResult<&mut Choice> {
        let location = self
            .locations
            .get_mut(location_id)
            .ok_or_else(|| GraphError::LocationNotFound(location_id.clone()))?;
        location
            .choices
            .iter_mut()
            .find(|c| c.id == *choice_id)
            .ok_or_else(|| GraphError::ChoiceNotFound {
                location: location_id.clone(),
                choice: choice_id.clone(),
            })
    }
}

/// Empty strings from free-text fields mean "unset".
fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
