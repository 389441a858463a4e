//! Error types for the `craftplan-resolver` crate.
//!
//! A [`ResolveError`] is the infeasible outcome of a resolution. Any
//! failure anywhere in the recipe tree aborts the whole request; no partial
//! plan is ever returned alongside one.

/// Why a request cannot be turned into a plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The item has no catalog entry and no block of the same name.
    #[error("unknown item: {item}")]
    UnknownItem {
        /// The unrecognized item name.
        item: String,
    },

    /// The item recurs on its own active expansion path.
    #[error("circular dependency: {}", .path.join(" -> "))]
    Circular {
        /// The item seen twice.
        item: String,
        /// The expansion path, outermost first, ending with the repeated item.
        path: Vec<String>,
    },

    /// The recipe chain is deeper than the configured ceiling.
    #[error("recipe chain for {item} exceeds depth limit {limit}")]
    DepthExceeded {
        /// The item being expanded when the ceiling was hit.
        item: String,
        /// The configured ceiling.
        limit: usize,
    },

    /// The catalog reported recipes for the item but none could be chosen.
    #[error("no usable recipe for {item}")]
    NoRecipe {
        /// The item without a usable recipe.
        item: String,
    },

    /// A quantity computation overflowed `u32`.
    #[error("arithmetic overflow while resolving: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}

impl ResolveError {
    /// Short human-readable category of the failure.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::UnknownItem { .. } => "unknown item",
            Self::Circular { .. } => "circular dependency",
            Self::DepthExceeded { .. } => "recipe chain too deep",
            Self::NoRecipe { .. } => "no usable recipe",
            Self::ArithmeticOverflow { .. } => "quantity overflow",
        }
    }

    /// The item the failure concerns, when there is one.
    pub fn item(&self) -> Option<&str> {
        match self {
            Self::UnknownItem { item }
            | Self::Circular { item, .. }
            | Self::DepthExceeded { item, .. }
            | Self::NoRecipe { item } => Some(item.as_str()),
            Self::ArithmeticOverflow { .. } => None,
        }
    }

    pub(crate) fn overflow(context: &str) -> Self {
        Self::ArithmeticOverflow {
            context: context.to_owned(),
        }
    }
}
