//! Deterministic recipe and ingredient selection.
//!
//! When an item has several recipes, or a recipe slot accepts several
//! items, the selector picks the one built from the most conventional
//! materials according to the catalog's [`PreferenceTable`]. It is a pure
//! function of its candidates: no randomness, and it never looks at what
//! is currently held.

use craftplan_catalog::{Ingredient, PreferenceTable, Recipe};

/// Chooses among recipes and slot alternatives by preference score.
#[derive(Debug, Clone, Copy)]
pub struct RecipeSelector<'a> {
    preferences: &'a PreferenceTable,
}

impl<'a> RecipeSelector<'a> {
    /// A selector ranking by `preferences`.
    pub const fn new(preferences: &'a PreferenceTable) -> Self {
        Self { preferences }
    }

    /// Preference score of a single item; lower is better.
    pub fn score(&self, item: &str) -> u32 {
        self.preferences.score(item)
    }

    /// The lowest-scoring alternative for a slot. Ties keep the first
    /// declared option. `None` only for a slot with no options.
    pub fn pick_option<'r>(&self, ingredient: &'r Ingredient) -> Option<&'r str> {
        ingredient
            .options
            .iter()
            .min_by_key(|option| self.score(option))
            .map(String::as_str)
    }

    /// Sum of each slot's best-option score.
    pub fn recipe_score(&self, recipe: &Recipe) -> u32 {
        recipe
            .ingredients
            .iter()
            .filter_map(|ingredient| self.pick_option(ingredient))
            .fold(0_u32, |total, option| total.saturating_add(self.score(option)))
    }

    /// The candidate with the lowest total score. Ties keep the first
    /// candidate; a single candidate is returned without scoring.
    pub fn select<'r>(&self, candidates: &'r [Recipe]) -> Option<&'r Recipe> {
        if let [only] = candidates {
            return Some(only);
        }
        candidates.iter().min_by_key(|recipe| self.recipe_score(recipe))
    }
}
