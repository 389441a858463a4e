//! Crafting dependency resolver.
//!
//! Given a desired item, a target quantity, and a snapshot of held items,
//! the resolver computes an ordered, deduplicated plan of primitive
//! actions (collect, smelt, craft) that produces the target. It reads game
//! data through [`craftplan_catalog::Catalog`] and never executes anything.
//!
//! # Modules
//!
//! - [`config`] -- Resolver tunables ([`ResolverConfig`])
//! - [`error`] -- Infeasibility taxonomy ([`ResolveError`])
//! - [`merge`] -- Collapsing raw resolutions into final plans
//! - [`queue`] -- The owned plan queue an executor consumes ([`PlanQueue`])
//! - [`resolver`] -- Recursive expansion ([`Resolver`], [`CycleGuard`])
//! - [`selector`] -- Preference-based recipe choice ([`RecipeSelector`])
//! - [`smelting`] -- Furnace expansion and fuel sizing
//!
//! ```no_run
//! use craftplan_catalog::starter_book;
//! use craftplan_resolver::{Resolver, ResolverConfig};
//! use craftplan_types::Holdings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let book = starter_book()?;
//! let config = ResolverConfig::default();
//! let plan = Resolver::new(&book, &config).plan("wooden_pickaxe", 1, &Holdings::new())?;
//! for step in &plan {
//!     println!("{step}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod merge;
pub mod queue;
pub mod resolver;
pub mod selector;
pub mod smelting;

// Re-export primary types at crate root.
pub use config::{ConfigError, ResolverConfig};
pub use error::ResolveError;
pub use merge::merge;
pub use queue::{PlanQueue, craft_repeats};
pub use resolver::{CycleGuard, Resolver};
pub use selector::RecipeSelector;
pub use smelting::fuel_units_needed;
