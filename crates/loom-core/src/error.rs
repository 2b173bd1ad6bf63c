use crate::location::{ChoiceId, LocationId};

/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur when manipulating an adventure.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The requested location ID does not exist in the graph.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// The requested choice ID does not exist at the given location.
    #[error("choice not found: {choice} at location {location}")]
    ChoiceNotFound {
        /// The location that was searched.
        location: LocationId,
        /// The missing choice ID.
        choice: ChoiceId,
    },

    /// An imported container failed basic shape validation.
    #[error("malformed adventure file: {0}")]
    MalformedImport(String),
}
