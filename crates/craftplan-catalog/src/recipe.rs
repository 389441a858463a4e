//! Recipe definitions as written in catalog files, and their extraction.
//!
//! A recipe is declared either **shaped** (pattern rows plus a key mapping
//! each pattern character to a slot) or **shapeless** (a list of slots).
//! A slot names one item or a list of acceptable alternatives:
//!
//! ```yaml
//! stick:
//!   - pattern: ["P", "P"]
//!     key: { P: [oak_planks, spruce_planks] }
//!     count: 4
//! torch:
//!   - ingredients: [[coal, charcoal], stick]
//!     count: 4
//! ```
//!
//! [`extract`] flattens either layout into [`Ingredient`] slots. Identical
//! slots collapse into one entry counting their occurrences. Alternatives
//! that name nothing the catalog knows are dropped without failing the
//! recipe; a slot left with no alternatives is dropped entirely. A
//! definition that loses every slot this way is unusable and yields no
//! recipe at all, so nothing can be crafted from thin air.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Ingredient, Recipe};
use crate::error::CatalogError;

/// Side length of the personal crafting grid.
pub const PERSONAL_GRID_SIZE: usize = 2;

/// Slots available in the personal crafting grid.
const PERSONAL_GRID_SLOTS: usize = PERSONAL_GRID_SIZE * PERSONAL_GRID_SIZE;

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// A single recipe as declared in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeDef {
    /// Fixed-shape layout.
    Shaped {
        /// Pattern rows; a space is an empty cell.
        pattern: Vec<String>,
        /// What each pattern character stands for.
        key: BTreeMap<char, SlotDef>,
        /// Units produced per craft.
        #[serde(default = "default_count")]
        count: u32,
    },
    /// Order-independent layout.
    Shapeless {
        /// One entry per occupied cell.
        ingredients: Vec<SlotDef>,
        /// Units produced per craft.
        #[serde(default = "default_count")]
        count: u32,
    },
}

/// One cell of a recipe: a single item or several acceptable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotDef {
    /// Exactly this item.
    Item(String),
    /// Any of these items, most conventional first.
    AnyOf(Vec<String>),
}

impl SlotDef {
    fn options(&self) -> Vec<&str> {
        match self {
            Self::Item(item) => vec![item.as_str()],
            Self::AnyOf(options) => options.iter().map(String::as_str).collect(),
        }
    }
}

const fn default_count() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Flatten a recipe definition for `output` into an extracted [`Recipe`].
///
/// `is_known` decides which alternatives survive. Returns `Ok(None)` when
/// no slot has a known alternative left.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRecipe`] when the output count is zero,
/// when the definition has no cells at all, or when a pattern uses a
/// character missing from its key.
pub fn extract(
    output: &str,
    def: &RecipeDef,
    is_known: impl Fn(&str) -> bool,
) -> Result<Option<Recipe>, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecipe {
        item: output.to_owned(),
        reason,
    };

    let (cells, count, needs_table) = match def {
        RecipeDef::Shaped {
            pattern,
            key,
            count,
        } => {
            let width = pattern.iter().map(|row| row.chars().count()).max().unwrap_or(0);
            let height = pattern.len();
            let mut cells = Vec::new();
            for row in pattern {
                for ch in row.chars().filter(|ch| *ch != ' ') {
                    let slot = key
                        .get(&ch)
                        .ok_or_else(|| invalid(format!("pattern character '{ch}' has no key")))?;
                    cells.push(slot);
                }
            }
            let needs_table = width > PERSONAL_GRID_SIZE || height > PERSONAL_GRID_SIZE;
            (cells, *count, needs_table)
        }
        RecipeDef::Shapeless { ingredients, count } => {
            let needs_table = ingredients.len() > PERSONAL_GRID_SLOTS;
            (ingredients.iter().collect::<Vec<_>>(), *count, needs_table)
        }
    };

    if count == 0 {
        return Err(invalid(String::from("output count must be at least 1")));
    }
    if cells.is_empty() {
        return Err(invalid(String::from("recipe has no ingredients")));
    }

    let mut ingredients: Vec<Ingredient> = Vec::new();
    for slot in cells {
        let options: Vec<String> = slot
            .options()
            .into_iter()
            .filter(|option| {
                let known = is_known(option);
                if !known {
                    tracing::debug!(recipe = output, ingredient = *option, "skipping unknown ingredient");
                }
                known
            })
            .map(str::to_owned)
            .collect();

        if options.is_empty() {
            continue;
        }

        if let Some(existing) = ingredients.iter_mut().find(|ing| ing.options == options) {
            existing.count = existing.count.checked_add(1).ok_or_else(|| {
                invalid(String::from("ingredient count overflow"))
            })?;
        } else {
            ingredients.push(Ingredient { options, count: 1 });
        }
    }

    if ingredients.is_empty() {
        tracing::debug!(recipe = output, "every ingredient unknown, dropping definition");
        return Ok(None);
    }

    Ok(Some(Recipe {
        ingredients,
        output_count: count,
        needs_table,
    }))
}
