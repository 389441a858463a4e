//! Item, recipe, smelting, and fuel catalog for the craftplan resolver.
//!
//! The resolver never owns game data; it reads it through the [`Catalog`]
//! trait. This crate defines that trait and a file-backed implementation.
//!
//! # Modules
//!
//! - [`book`] -- [`RecipeBook`], loaded from YAML or JSON, with validation
//! - [`catalog`] -- The [`Catalog`] trait and extracted [`Recipe`] types
//! - [`error`] -- Catalog loading errors ([`CatalogError`])
//! - [`preference`] -- Static material ranking ([`PreferenceTable`])
//! - [`recipe`] -- Shaped and shapeless recipe definitions and extraction
//! - [`starter`] -- Built-in starter catalog

pub mod book;
pub mod catalog;
pub mod error;
pub mod preference;
pub mod recipe;
pub mod starter;

// Re-export primary types at crate root.
pub use book::{CatalogFile, DEFAULT_ITEMS_PER_FUEL_UNIT, RecipeBook};
pub use catalog::{Catalog, Fuel, Ingredient, Recipe, SmeltingSource};
pub use error::CatalogError;
pub use preference::{PreferenceCategory, PreferenceTable};
pub use recipe::{RecipeDef, SlotDef};
pub use starter::{STARTER_CATALOG_YAML, starter_book};
