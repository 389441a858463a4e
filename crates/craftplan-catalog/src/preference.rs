//! Static preference ranking for recipe and ingredient selection.
//!
//! When several recipes or slot alternatives could produce the same thing,
//! the selector prefers common materials: oak over cherry planks,
//! cobblestone over blackstone. Each [`PreferenceCategory`] carries an
//! ordered list; an item's score is its index in the first list containing
//! it. Items in no list get [`PreferenceTable::neutral_score`], which is
//! strictly greater than every listed index.
//!
//! The ranking never looks at what is currently held.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A family of interchangeable materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceCategory {
    /// Wooden planks.
    Planks,
    /// Logs and stems.
    Logs,
    /// Cobblestone-like building stone.
    Stone,
    /// Dyes.
    Dyes,
}

impl PreferenceCategory {
    /// Every category, in lookup order.
    pub const ALL: [Self; 4] = [Self::Planks, Self::Logs, Self::Stone, Self::Dyes];

    /// The built-in ordering for this category, most preferred first.
    pub const fn builtin(self) -> &'static [&'static str] {
        match self {
            Self::Planks => &[
                "oak_planks",
                "spruce_planks",
                "birch_planks",
                "jungle_planks",
                "acacia_planks",
                "dark_oak_planks",
                "mangrove_planks",
                "cherry_planks",
                "bamboo_planks",
                "crimson_planks",
                "warped_planks",
            ],
            Self::Logs => &[
                "oak_log",
                "spruce_log",
                "birch_log",
                "jungle_log",
                "acacia_log",
                "dark_oak_log",
                "mangrove_log",
                "cherry_log",
                "crimson_stem",
                "warped_stem",
            ],
            Self::Stone => &["cobblestone", "cobbled_deepslate", "blackstone", "stone"],
            Self::Dyes => &[
                "white_dye",
                "black_dye",
                "red_dye",
                "yellow_dye",
                "blue_dye",
                "green_dye",
                "brown_dye",
                "orange_dye",
                "light_gray_dye",
                "gray_dye",
                "light_blue_dye",
                "cyan_dye",
                "lime_dye",
                "pink_dye",
                "magenta_dye",
                "purple_dye",
            ],
        }
    }
}

/// Ordered preference lists per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable {
    lists: BTreeMap<PreferenceCategory, Vec<String>>,
}

impl Default for PreferenceTable {
    fn default() -> Self {
        let lists = PreferenceCategory::ALL
            .into_iter()
            .map(|category| {
                let list = category.builtin().iter().map(|s| (*s).to_owned()).collect();
                (category, list)
            })
            .collect();
        Self { lists }
    }
}

impl PreferenceTable {
    /// Built-in lists, with any category present in `overrides` replaced.
    pub fn with_overrides(overrides: BTreeMap<PreferenceCategory, Vec<String>>) -> Self {
        let mut table = Self::default();
        table.lists.extend(overrides);
        table
    }

    /// The ordered list for a category.
    pub fn list(&self, category: PreferenceCategory) -> &[String] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Score given to items that appear in no list.
    ///
    /// Equal to the longest list's length, so it beats no listed index.
    pub fn neutral_score(&self) -> u32 {
        let longest = self.lists.values().map(Vec::len).max().unwrap_or(0);
        u32::try_from(longest).unwrap_or(u32::MAX)
    }

    /// Preference score of `item`; lower is better.
    pub fn score(&self, item: &str) -> u32 {
        for list in self.lists.values() {
            if let Some(index) = list.iter().position(|candidate| candidate == item) {
                return u32::try_from(index).unwrap_or(u32::MAX);
            }
        }
        self.neutral_score()
    }
}
