//! Plan steps produced by the resolver and consumed by an executor.
//!
//! Only [`Action::Collect`], [`Action::Smelt`], and [`Action::Craft`] are ever
//! emitted by dependency resolution. The remaining variants are
//! execution-only steps an executor may queue on its own (for example a
//! `Place` for a crafting table it discovers is missing at run time).

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One primitive instruction in a plan.
///
/// Serialized with an internal `type` tag so an executor on the other side
/// of a JSON boundary sees `{"type": "collect", "target": "oak_log", "count": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Mine or pick up `count` units of a block.
    Collect {
        /// The block to break or gather.
        target: String,
        /// How many units to gather.
        count: u32,
    },
    /// Heat `count` units of `input` into `output`.
    Smelt {
        /// The item fed into the furnace.
        input: String,
        /// The item taken out of the furnace.
        output: String,
        /// How many units to smelt.
        count: u32,
    },
    /// Craft `target` until the executor holds `count` of it.
    ///
    /// `count` is the desired final holding, not an increment. The executor
    /// re-derives the actual number of crafts from live holdings.
    Craft {
        /// The item to craft.
        target: String,
        /// Desired total holding after crafting.
        count: u32,
    },
    /// Place a block from the inventory next to the executor.
    Place {
        /// The block item to place.
        block: String,
    },
    /// Walk to a world position.
    Move {
        /// East-west coordinate.
        x: i32,
        /// Vertical coordinate.
        y: i32,
        /// North-south coordinate.
        z: i32,
    },
    /// Follow a player until told otherwise.
    Follow {
        /// The player name to follow.
        player: String,
    },
    /// Halt whatever is running.
    Stop,
}

impl Action {
    /// Build a [`Action::Collect`] step.
    pub fn collect(target: impl Into<String>, count: u32) -> Self {
        Self::Collect {
            target: target.into(),
            count,
        }
    }

    /// Build a [`Action::Smelt`] step.
    pub fn smelt(input: impl Into<String>, output: impl Into<String>, count: u32) -> Self {
        Self::Smelt {
            input: input.into(),
            output: output.into(),
            count,
        }
    }

    /// Build a [`Action::Craft`] step.
    pub fn craft(target: impl Into<String>, count: u32) -> Self {
        Self::Craft {
            target: target.into(),
            count,
        }
    }

    /// The category this step belongs to.
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Collect { .. } => ActionKind::Collect,
            Self::Smelt { .. } => ActionKind::Smelt,
            Self::Craft { .. } => ActionKind::Craft,
            Self::Place { .. } => ActionKind::Place,
            Self::Move { .. } => ActionKind::Move,
            Self::Follow { .. } => ActionKind::Follow,
            Self::Stop => ActionKind::Stop,
        }
    }

    /// The quantity carried by this step, if it has one.
    pub const fn count(&self) -> Option<u32> {
        match self {
            Self::Collect { count, .. } | Self::Smelt { count, .. } | Self::Craft { count, .. } => {
                Some(*count)
            }
            Self::Place { .. } | Self::Move { .. } | Self::Follow { .. } | Self::Stop => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collect { target, count } => write!(f, "collect {count} {target}"),
            Self::Smelt {
                input,
                output,
                count,
            } => write!(f, "smelt {count} {input} into {output}"),
            Self::Craft { target, count } => write!(f, "craft {target} up to {count}"),
            Self::Place { block } => write!(f, "place {block}"),
            Self::Move { x, y, z } => write!(f, "move to {x} {y} {z}"),
            Self::Follow { player } => write!(f, "follow {player}"),
            Self::Stop => f.write_str("stop"),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

/// The category of an [`Action`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Gathering a raw block.
    Collect,
    /// Furnace transformation.
    Smelt,
    /// Recipe combination.
    Craft,
    /// Placing a block.
    Place,
    /// Movement.
    Move,
    /// Following a player.
    Follow,
    /// Halting.
    Stop,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
