//! Collapsing a raw resolution into a final plan.
//!
//! Recursive expansion can reach the same intermediate from several
//! branches, so the raw action list repeats targets. [`merge`] groups it by
//! category:
//!
//! 1. `Collect` steps, summed per target.
//! 2. `Smelt` steps, summed per (input, output) pair.
//! 3. `Craft` steps, one per target, carrying the **last** count written
//!    for it. Craft counts are final totals, so a later write supersedes an
//!    earlier one instead of adding to it.
//! 4. Anything else, unchanged and in order.
//!
//! Within each group targets keep their first-occurrence order. Because a
//! craft is always emitted after its ingredients, that order already
//! respects prerequisites.

use craftplan_types::Action;
use indexmap::IndexMap;

/// Merge a raw action sequence into a deduplicated, category-ordered plan.
pub fn merge(actions: impl IntoIterator<Item = Action>) -> Vec<Action> {
    let mut collects: IndexMap<String, u32> = IndexMap::new();
    let mut smelts: IndexMap<(String, String), u32> = IndexMap::new();
    let mut crafts: IndexMap<String, u32> = IndexMap::new();
    let mut others: Vec<Action> = Vec::new();

    for action in actions {
        match action {
            Action::Collect { target, count } => {
                let total = collects.entry(target).or_insert(0);
                *total = total.saturating_add(count);
            }
            Action::Smelt {
                input,
                output,
                count,
            } => {
                let total = smelts.entry((input, output)).or_insert(0);
                *total = total.saturating_add(count);
            }
            Action::Craft { target, count } => {
                crafts.insert(target, count);
            }
            other => others.push(other),
        }
    }

    let mut plan = Vec::with_capacity(
        collects
            .len()
            .saturating_add(smelts.len())
            .saturating_add(crafts.len())
            .saturating_add(others.len()),
    );
    plan.extend(
        collects
            .into_iter()
            .map(|(target, count)| Action::Collect { target, count }),
    );
    plan.extend(
        smelts
            .into_iter()
            .map(|((input, output), count)| Action::Smelt {
                input,
                output,
                count,
            }),
    );
    plan.extend(
        crafts
            .into_iter()
            .map(|(target, count)| Action::Craft { target, count }),
    );
    plan.extend(others);
    plan
}
