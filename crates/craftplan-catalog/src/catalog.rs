//! The read-only catalog accessor consulted during resolution.
//!
//! The [`Catalog`] trait abstracts where item and recipe data come from.
//! [`RecipeBook`](crate::book::RecipeBook) is the in-memory implementation
//! loaded from a YAML or JSON file; embedders with their own registry (for
//! example a live game data table) implement the trait directly.
//!
//! Recipes handed out through the trait are already extracted: whatever
//! layout they were declared in, they arrive as a flat list of
//! [`Ingredient`] slots.

use crate::preference::PreferenceTable;

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// One acceptable way to produce an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Ingredient slots in first-occurrence order.
    pub ingredients: Vec<Ingredient>,
    /// How many units of the output one craft produces (at least 1).
    pub output_count: u32,
    /// Whether the recipe needs a 3x3 crafting surface rather than the
    /// personal 2x2 grid.
    pub needs_table: bool,
}

/// A recipe slot: how many units are consumed and which items may fill it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    /// Acceptable items, in declaration order. Never empty.
    pub options: Vec<String>,
    /// Units consumed per craft.
    pub count: u32,
}

impl Ingredient {
    /// A slot that accepts exactly one item.
    pub fn single(item: impl Into<String>, count: u32) -> Self {
        Self {
            options: vec![item.into()],
            count,
        }
    }

    /// A slot that accepts any of several items.
    pub fn any_of<S: Into<String>>(options: impl IntoIterator<Item = S>, count: u32) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            count,
        }
    }

    /// Whether more than one item can fill this slot.
    pub fn has_alternatives(&self) -> bool {
        self.options.len() > 1
    }
}

// ---------------------------------------------------------------------------
// Smelting and fuel
// ---------------------------------------------------------------------------

/// Where a smelted item comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmeltingSource {
    /// The item put into the furnace.
    pub input: String,
    /// How many items one fuel unit smelts.
    pub items_per_fuel_unit: u32,
}

/// A recognized furnace fuel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fuel {
    /// The fuel item name.
    pub item: String,
    /// How many items one unit of this fuel can smelt.
    pub items_smeltable: u32,
}

// ---------------------------------------------------------------------------
// Catalog trait
// ---------------------------------------------------------------------------

/// Read-only lookups over items, blocks, recipes, smelting, and fuel.
///
/// Implementations must be safe to share between threads: concurrent
/// resolutions read the same catalog without coordination.
pub trait Catalog: Send + Sync {
    /// Whether `name` is a registered item.
    fn item_exists(&self, name: &str) -> bool;

    /// Whether `name` is a block that can be mined or placed.
    fn block_exists(&self, name: &str) -> bool;

    /// All recipes producing `item`, extracted. Empty for raw materials.
    fn recipes(&self, item: &str) -> &[Recipe];

    /// The block to mine to obtain `item`, when it differs from the item name.
    fn block_source(&self, item: &str) -> Option<&str>;

    /// The smelting entry producing `output`, if it is obtained by heating.
    fn smelting_source(&self, output: &str) -> Option<&SmeltingSource>;

    /// Recognized fuels in preference order.
    fn fuels(&self) -> &[Fuel];

    /// Static ranking used to choose among recipes and slot alternatives.
    fn preferences(&self) -> &PreferenceTable;

    /// Whether `item` has at least one recipe.
    fn has_recipe(&self, item: &str) -> bool {
        !self.recipes(item).is_empty()
    }
}
