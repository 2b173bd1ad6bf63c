//! Deterministic template-based generator.
//!
//! Composes descriptions and choice labels from small phrase tables, keyed
//! by a hash of the inputs so repeated calls over different locations vary
//! without any randomness. Doubles as the test stand-in for a real
//! generative backend.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::ContentGenerator;

const OPENERS: &[&str] = &[
    "You arrive at",
    "Before you lies",
    "You find yourself within",
    "The path opens onto",
];

const ATMOSPHERES: &[&str] = &[
    "The air is heavy and still, as if the place itself is holding its breath.",
    "A faint sound carries from somewhere deeper in, too regular to be the wind.",
    "Shadows pool in the corners, and something glints where the light cannot reach.",
    "Dust hangs in pale shafts of light, undisturbed for what must be years.",
];

const HOOKS: &[&str] = &[
    "Something about this place suggests it guards more than one way forward.",
    "Whatever happens next, there will be no pretending you were never here.",
    "You have the distinct feeling that you are expected.",
    "A choice will have to be made here, and soon.",
];

const ACTIONS: &[&str] = &[
    "Press on into the dark",
    "Search the area carefully",
    "Call out and wait",
    "Retrace your steps",
    "Follow the sound",
    "Examine the glinting thing",
];

/// A generator that composes text from phrase tables.
#[derive(Debug, Clone, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// Create a template generator.
    pub fn new() -> Self {
        Self
    }
}

fn seed(parts: &[&str]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for part in parts {
        part.hash(&mut hasher);
    }
    hasher.finish()
}

fn pick<'a>(table: &[&'a str], seed: u64, slot: u64) -> &'a str {
    let index = (seed.rotate_left(slot as u32 * 13) as usize) % table.len();
    table[index]
}

impl ContentGenerator for TemplateGenerator {
    fn generate_description(&self, location_name: &str, theme: &str) -> String {
        let name = if location_name.is_empty() {
            "an unnamed place"
        } else {
            location_name
        };
        let seed = seed(&[name, theme]);
        format!(
            "{} {}, deep in a {} tale. {} {}",
            pick(OPENERS, seed, 0),
            name,
            if theme.is_empty() { "curious" } else { theme },
            pick(ATMOSPHERES, seed, 1),
            pick(HOOKS, seed, 2),
        )
    }

    fn generate_choices(&self, description: &str, theme: &str) -> Vec<String> {
        if description.is_empty() {
            return Vec::new();
        }
        let seed = seed(&[description, theme]);
        // Three distinct actions, stepping through the table from a hashed
        // starting point.
        let start = (seed as usize) % ACTIONS.len();
        (0..3)
            .map(|i| ACTIONS[(start + i * 2 + 1) % ACTIONS.len()].to_string())
            .collect()
    }
}
