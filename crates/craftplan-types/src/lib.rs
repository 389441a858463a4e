//! Shared type definitions for the craftplan workspace.
//!
//! This crate is the single source of truth for the values that flow
//! between the catalog, the resolver, and whatever executes a plan.
//!
//! # Modules
//!
//! - [`actions`] -- Plan steps ([`Action`]) and their categories ([`ActionKind`])
//! - [`inventory`] -- Held item snapshots ([`Holdings`]) and promised output ([`Pending`])

pub mod actions;
pub mod inventory;

// Re-export all public types at crate root for convenience.
pub use actions::{Action, ActionKind};
pub use inventory::{Holdings, Pending};
