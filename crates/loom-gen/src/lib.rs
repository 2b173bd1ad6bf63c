//! Content-generation collaborator for Storyloom authoring.
//!
//! The authoring surface can ask a generator for a location description or a
//! handful of choice labels. The core graph never calls a generator itself —
//! generated text enters the model through the ordinary mutators, so a
//! generator is free to be a network service, a local model, or the bundled
//! deterministic [`TemplateGenerator`].

/// Deterministic template-based generator.
pub mod templates;

pub use templates::TemplateGenerator;

use loom_core::{AdventureGraph, GraphResult, LocationId, LocationPatch};

/// An opaque text-generation collaborator.
///
/// Implementations must never propagate a fault: on any internal failure
/// they return an error-flavored string or an empty list, so the authoring
/// layer can always use the result directly.
pub trait ContentGenerator {
    /// Produce a narrative description for a location with the given name,
    /// in the given theme.
    fn generate_description(&self, location_name: &str, theme: &str) -> String;

    /// Produce a few short, actionable choice labels that fit a location
    /// description, in the given theme.
    fn generate_choices(&self, description: &str, theme: &str) -> Vec<String>;
}

/// Generate a description for a location and write it into the graph.
pub fn apply_description(
    generator: &dyn ContentGenerator,
    graph: &mut AdventureGraph,
    id: &LocationId,
    theme: &str,
) -> GraphResult<String> {
    let name = graph
        .location(id)
        .ok_or_else(|| loom_core::GraphError::LocationNotFound(id.clone()))?
        .name
        .clone();
    let description = generator.generate_description(&name, theme);
    graph.update_location(
        id,
        LocationPatch {
            description: Some(description.clone()),
            ..Default::default()
        },
    )?;
    Ok(description)
}

/// Generate choice labels from a location's description and append them as
/// destination-less choices, ready for the author to wire up. Returns the
/// appended labels.
pub fn apply_choices(
    generator: &dyn ContentGenerator,
    graph: &mut AdventureGraph,
    id: &LocationId,
    theme: &str,
) -> GraphResult<Vec<String>> {
    let description = graph
        .location(id)
        .ok_or_else(|| loom_core::GraphError::LocationNotFound(id.clone()))?
        .description
        .clone();
    let labels = generator.generate_choices(&description, theme);
    for label in &labels {
        let choice_id = graph.add_choice(id)?;
        graph.update_choice(id, &choice_id, loom_core::ChoiceField::Text, label)?;
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_description_writes_into_the_graph() {
        let mut graph = AdventureGraph::new();
        let id = graph.add_location();
        let generator = TemplateGenerator::new();

        let text = apply_description(&generator, &mut graph, &id, "Fantasy Quest").unwrap();
        assert!(!text.is_empty());
        assert_eq!(graph.location(&id).unwrap().description, text);
    }

    #[test]
    fn apply_choices_appends_unwired_choices() {
        let mut graph = AdventureGraph::new();
        let id = graph.add_location();
        let generator = TemplateGenerator::new();
        apply_description(&generator, &mut graph, &id, "Fantasy Quest").unwrap();

        let labels = apply_choices(&generator, &mut graph, &id, "Fantasy Quest").unwrap();
        let location = graph.location(&id).unwrap();
        assert_eq!(location.choices.len(), labels.len());
        for (choice, label) in location.choices.iter().zip(&labels) {
            assert_eq!(&choice.text, label);
            assert!(choice.destination.is_empty());
        }
    }

    #[test]
    fn missing_location_is_reported() {
        let mut graph = AdventureGraph::new();
        let generator = TemplateGenerator::new();
        let missing = LocationId::from("loc_missing");
        assert!(apply_description(&generator, &mut graph, &missing, "noir").is_err());
        assert!(apply_choices(&generator, &mut graph, &missing, "noir").is_err());
    }
}
