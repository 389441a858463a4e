//! In-memory catalog loaded from a YAML or JSON file.
//!
//! A catalog file has this shape (every section optional):
//!
//! ```yaml
//! items: [oak_log, raw_iron]
//! blocks: [oak_log, iron_ore, coal_ore, dirt]
//! block_sources: { raw_iron: iron_ore, coal: coal_ore }
//! recipes:
//!   oak_planks:
//!     - ingredients: [oak_log]
//!       count: 4
//! smelting:
//!   iron_ingot: { input: raw_iron, items_per_fuel_unit: 8 }
//! fuels:
//!   - { item: coal, items_smeltable: 8 }
//! preferences:
//!   planks: [oak_planks, birch_planks]
//! ```
//!
//! Recipe outputs, smelting inputs and outputs, fuels, and block-source
//! keys are registered as items automatically. Blocks are a separate
//! namespace: a name listed only under `blocks` is a block but not an item.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Catalog, Fuel, Recipe, SmeltingSource};
use crate::error::CatalogError;
use crate::preference::{PreferenceCategory, PreferenceTable};
use crate::recipe::{RecipeDef, extract};

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

/// Raw catalog file contents, before recipe extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogFile {
    /// Explicitly registered items.
    #[serde(default)]
    pub items: Vec<String>,
    /// Minable or placeable blocks.
    #[serde(default)]
    pub blocks: Vec<String>,
    /// Item name to the differently named block that drops it.
    #[serde(default)]
    pub block_sources: BTreeMap<String, String>,
    /// Recipe definitions per output item.
    #[serde(default)]
    pub recipes: BTreeMap<String, Vec<RecipeDef>>,
    /// Smelting table keyed by output item.
    #[serde(default)]
    pub smelting: BTreeMap<String, SmeltingEntry>,
    /// Fuels in preference order.
    #[serde(default)]
    pub fuels: Vec<FuelEntry>,
    /// Preference list overrides.
    #[serde(default)]
    pub preferences: BTreeMap<PreferenceCategory, Vec<String>>,
}

/// A smelting table row as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SmeltingEntry {
    /// The item put into the furnace.
    pub input: String,
    /// Items smelted per fuel unit.
    #[serde(default = "default_items_per_fuel_unit")]
    pub items_per_fuel_unit: u32,
}

/// A fuel row as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FuelEntry {
    /// The fuel item.
    pub item: String,
    /// Items one unit of this fuel smelts.
    #[serde(default = "default_items_per_fuel_unit")]
    pub items_smeltable: u32,
}

/// Items smelted by one unit of standard fuel.
pub const DEFAULT_ITEMS_PER_FUEL_UNIT: u32 = 8;

const fn default_items_per_fuel_unit() -> u32 {
    DEFAULT_ITEMS_PER_FUEL_UNIT
}

// ---------------------------------------------------------------------------
// RecipeBook
// ---------------------------------------------------------------------------

/// A fully loaded, immutable catalog.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    items: BTreeSet<String>,
    blocks: BTreeSet<String>,
    block_sources: BTreeMap<String, String>,
    recipes: BTreeMap<String, Vec<Recipe>>,
    unusable: BTreeSet<String>,
    smelting: BTreeMap<String, SmeltingSource>,
    fuels: Vec<Fuel>,
    preferences: PreferenceTable,
}

impl RecipeBook {
    /// Build a book from parsed file contents, extracting every recipe.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecipe`] for a structurally broken
    /// recipe and [`CatalogError::InvalidSmelting`] for a smelting row with
    /// zero throughput.
    pub fn from_catalog_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let mut items: BTreeSet<String> = file.items.into_iter().collect();
        items.extend(file.recipes.keys().cloned());
        items.extend(file.block_sources.keys().cloned());
        for (output, entry) in &file.smelting {
            items.insert(output.clone());
            items.insert(entry.input.clone());
        }
        items.extend(file.fuels.iter().map(|fuel| fuel.item.clone()));

        let blocks: BTreeSet<String> = file.blocks.into_iter().collect();
        let is_known = |name: &str| items.contains(name) || blocks.contains(name);

        let mut recipes = BTreeMap::new();
        let mut unusable = BTreeSet::new();
        for (output, defs) in &file.recipes {
            let mut extracted = Vec::with_capacity(defs.len());
            for def in defs {
                if let Some(recipe) = extract(output, def, is_known)? {
                    extracted.push(recipe);
                }
            }
            if extracted.is_empty() {
                tracing::warn!(item = %output, "no usable recipe, every definition names unknown ingredients");
                unusable.insert(output.clone());
                continue;
            }
            recipes.insert(output.clone(), extracted);
        }

        let mut smelting = BTreeMap::new();
        for (output, entry) in file.smelting {
            if entry.items_per_fuel_unit == 0 {
                return Err(CatalogError::InvalidSmelting {
                    output,
                    reason: String::from("items_per_fuel_unit must be at least 1"),
                });
            }
            smelting.insert(
                output,
                SmeltingSource {
                    input: entry.input,
                    items_per_fuel_unit: entry.items_per_fuel_unit,
                },
            );
        }

        let fuels = file
            .fuels
            .into_iter()
            .map(|entry| Fuel {
                item: entry.item,
                items_smeltable: entry.items_smeltable,
            })
            .collect();

        let book = Self {
            items,
            blocks,
            block_sources: file.block_sources,
            recipes,
            unusable,
            smelting,
            fuels,
            preferences: PreferenceTable::with_overrides(file.preferences),
        };

        tracing::debug!(
            items = book.items.len(),
            blocks = book.blocks.len(),
            recipes = book.recipes.len(),
            smelting = book.smelting.len(),
            "catalog loaded"
        );

        Ok(book)
    }

    /// Parse a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Yaml`] if the string is not valid YAML, or
    /// any error from [`RecipeBook::from_catalog_file`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yml::from_str(yaml)?;
        Self::from_catalog_file(file)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the string is not valid JSON, or
    /// any error from [`RecipeBook::from_catalog_file`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_catalog_file(file)
    }

    /// Load a catalog from disk. Files ending in `.json` are read as JSON,
    /// everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or the
    /// parse errors of [`RecipeBook::from_yaml_str`] and
    /// [`RecipeBook::from_json_str`].
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Number of registered items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Report problems that do not prevent loading.
    ///
    /// Checks that every declared recipe kept at least one usable
    /// definition, that block sources point at known blocks, that smelting
    /// inputs are obtainable, and that recipes (following each slot's
    /// first alternative) form no cycle. An empty list means clean.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for item in &self.unusable {
            errors.push(format!(
                "Item '{item}' declares recipes but every one names only unknown ingredients"
            ));
        }

        for (item, block) in &self.block_sources {
            if !self.blocks.contains(block) {
                errors.push(format!(
                    "Item '{item}' is mined from '{block}' which is not a known block"
                ));
            }
        }

        for (output, source) in &self.smelting {
            let obtainable = self.recipes.contains_key(&source.input)
                || self.smelting.contains_key(&source.input)
                || self.blocks.contains(&source.input)
                || self.block_sources.contains_key(&source.input);
            if !obtainable {
                errors.push(format!(
                    "Smelting '{output}' needs '{}' which cannot be collected, crafted, or smelted",
                    source.input
                ));
            }
        }

        // Kahn's algorithm over ingredient -> output edges.
        let mut in_degree: BTreeMap<&str, usize> = BTreeMap::new();
        let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (output, recipes) in &self.recipes {
            in_degree.entry(output.as_str()).or_insert(0);
            for recipe in recipes {
                for ingredient in &recipe.ingredients {
                    let Some(first) = ingredient.options.first() else {
                        continue;
                    };
                    in_degree.entry(first.as_str()).or_insert(0);
                    adjacency.entry(first.as_str()).or_default().push(output.as_str());
                    let entry = in_degree.entry(output.as_str()).or_insert(0);
                    *entry = entry.saturating_add(1);
                }
            }
        }

        let mut queue: VecDeque<&str> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(id, _)| *id)
            .collect();
        let mut visited_count: usize = 0;
        while let Some(node) = queue.pop_front() {
            visited_count = visited_count.saturating_add(1);
            if let Some(neighbors) = adjacency.get(node) {
                for &neighbor in neighbors {
                    if let Some(degree) = in_degree.get_mut(neighbor) {
                        *degree = degree.saturating_sub(1);
                        if *degree == 0 {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
        }

        if visited_count != in_degree.len() {
            let stuck: Vec<&str> = in_degree
                .iter()
                .filter(|(_, degree)| **degree > 0)
                .map(|(id, _)| *id)
                .collect();
            errors.push(format!(
                "Cycle detected among recipes: {}",
                stuck.join(", ")
            ));
        }

        errors
    }
}

impl Catalog for RecipeBook {
    fn item_exists(&self, name: &str) -> bool {
        self.items.contains(name)
    }

    fn block_exists(&self, name: &str) -> bool {
        self.blocks.contains(name)
    }

    fn recipes(&self, item: &str) -> &[Recipe] {
        self.recipes.get(item).map(Vec::as_slice).unwrap_or_default()
    }

    fn block_source(&self, item: &str) -> Option<&str> {
        self.block_sources.get(item).map(String::as_str)
    }

    fn smelting_source(&self, output: &str) -> Option<&SmeltingSource> {
        self.smelting.get(output)
    }

    fn fuels(&self) -> &[Fuel] {
        &self.fuels
    }

    fn preferences(&self) -> &PreferenceTable {
        &self.preferences
    }
}
