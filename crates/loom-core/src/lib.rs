//! Core types for Storyloom: locations, choices, and the adventure graph.
//!
//! This crate defines the data model that authoring tools mutate and the
//! playback engine walks. It is independent of any frontend — you can
//! construct an [`AdventureGraph`] programmatically or deserialize one from
//! JSON in the portable container format.

/// The adventure container and its portable import/export format.
pub mod adventure;
/// Error types used throughout the crate.
pub mod error;
/// The adventure graph: the location map and its mutators.
pub mod graph;
/// Non-fatal authoring diagnostics.
pub mod lint;
/// Location and choice types with their identifiers.
pub mod location;

/// Re-export container types.
pub use adventure::{Adventure, AdventureExport, AdventureId};
/// Re-export error types.
pub use error::{GraphError, GraphResult};
/// Re-export the graph and its edit types.
pub use graph::{AdventureGraph, ChoiceField, LocationPatch};
/// Re-export lint warnings.
pub use lint::LintWarning;
/// Re-export node and edge types.
pub use location::{Choice, ChoiceId, Location, LocationId};
