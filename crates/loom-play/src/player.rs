//! Player-side state: the inventory.

use std::collections::BTreeSet;

/// The player's state within one playthrough.
///
/// Inventory is a set of item names, never a multiset: picking up the same
/// item twice holds it once. Items are matched by plain string equality,
/// the same free-text values authors type into `addsItem`/`requiresItem`.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    inventory: BTreeSet<String>,
}

impl PlayerState {
    /// Create an empty player state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the player holds an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    /// Grant an item. Idempotent.
    pub fn grant(&mut self, item: impl Into<String>) {
        self.inventory.insert(item.into());
    }

    /// The items held, in sorted order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.inventory.iter().map(String::as_str)
    }

    /// Number of distinct items held.
    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    /// True if the player holds nothing.
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Drop everything, for a fresh playthrough.
    pub fn reset(&mut self) {
        self.inventory.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_is_idempotent() {
        let mut player = PlayerState::new();
        assert!(!player.has_item("Rusty Key"));

        player.grant("Rusty Key");
        player.grant("Rusty Key");
        assert!(player.has_item("Rusty Key"));
        assert_eq!(player.len(), 1);
    }

    #[test]
    fn reset_empties_inventory() {
        let mut player = PlayerState::new();
        player.grant("Rusty Key");
        player.grant("Lantern");
        assert_eq!(player.len(), 2);

        player.reset();
        assert!(player.is_empty());
    }

    #[test]
    fn items_are_sorted() {
        let mut player = PlayerState::new();
        player.grant("Lantern");
        player.grant("Amulet");
        let items: Vec<_> = player.items().collect();
        assert_eq!(items, vec!["Amulet", "Lantern"]);
    }
}
