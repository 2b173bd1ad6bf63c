//! Playback state machine for Storyloom adventures.
//!
//! A [`PlaySession`] walks an [`loom_core::AdventureGraph`] from its start
//! location, maintains the player's inventory, filters choices by their item
//! gates, and detects the finish condition. The session never owns or caches
//! the graph: every transition takes the live graph as an argument, so edits
//! made between transitions are picked up at the next one.

/// Error types for playback.
pub mod error;
/// Player-side state: the inventory.
pub mod player;
/// The session state machine and its render view.
pub mod session;

pub use error::{PlayError, PlayResult};
pub use player::PlayerState;
pub use session::{Notice, Phase, PlaySession, Scene};
