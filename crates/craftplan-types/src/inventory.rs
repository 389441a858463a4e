//! Item quantity maps used during resolution.
//!
//! [`Holdings`] is the caller's snapshot of what is actually in the
//! inventory. It is immutable once built; the resolver only reads it.
//! [`Pending`] records output that earlier steps of the same resolution
//! have promised to produce. Both use checked arithmetic throughout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Holdings
// ---------------------------------------------------------------------------

/// An immutable snapshot of held items, keyed by item name.
///
/// Missing items read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Holdings {
    items: BTreeMap<String, u32>,
}

impl Holdings {
    /// An empty snapshot.
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Quantity held of `item`.
    pub fn get(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Sum of the quantities held across several items.
    ///
    /// Returns `None` if the sum overflows `u32`.
    pub fn total_of<'a>(&self, items: impl IntoIterator<Item = &'a str>) -> Option<u32> {
        let mut total: u32 = 0;
        for item in items {
            total = total.checked_add(self.get(item))?;
        }
        Some(total)
    }

    /// Number of distinct items with a recorded quantity.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot records no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<BTreeMap<String, u32>> for Holdings {
    fn from(items: BTreeMap<String, u32>) -> Self {
        Self { items }
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Holdings {
    /// Later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(name, qty)| (name.into(), qty)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pending
// ---------------------------------------------------------------------------

/// Output promised by steps that will run before the current one.
///
/// Cloned for every sibling ingredient during resolution, so one branch's
/// promises are never visible to another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pending {
    items: BTreeMap<String, u32>,
}

impl Pending {
    /// An empty promise map.
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Quantity of `item` promised so far.
    pub fn get(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Record that `amount` more of `item` will be produced.
    ///
    /// Returns `None` (leaving the map unchanged) if the new total would
    /// overflow `u32`.
    pub fn promise(&mut self, item: &str, amount: u32) -> Option<u32> {
        let total = self.get(item).checked_add(amount)?;
        self.items.insert(item.to_owned(), total);
        Some(total)
    }

    /// Whether nothing has been promised.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
