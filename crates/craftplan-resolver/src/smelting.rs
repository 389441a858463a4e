//! Smelting expansion.
//!
//! An item with a smelting source is produced by heating its input. The
//! input is resolved recursively for the full amount, fuel is sized at the
//! source's fixed throughput per fuel unit, and if the fuel already held
//! (summed over every recognized fuel) falls short, the configured fuel
//! block is collected for the difference. Fuel efficiency differences
//! between fuel items are not modelled.

use craftplan_catalog::SmeltingSource;
use craftplan_types::{Action, Holdings, Pending};
use tracing::debug;

use crate::error::ResolveError;
use crate::resolver::{CycleGuard, Resolver};

/// Fuel units needed to smelt `items` at `items_per_fuel_unit`.
pub fn fuel_units_needed(items: u32, items_per_fuel_unit: u32) -> u32 {
    items.div_ceil(items_per_fuel_unit.max(1))
}

impl Resolver<'_> {
    /// Expand `needed` units of `output` obtained by smelting `source.input`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn expand_smelting(
        &self,
        output: &str,
        source: &SmeltingSource,
        needed: u32,
        holdings: &Holdings,
        pending: &mut Pending,
        guard: &CycleGuard<'_>,
        depth: usize,
    ) -> Result<Vec<Action>, ResolveError> {
        let mut branch = pending.clone();
        let mut actions = self.expand(
            &source.input,
            needed,
            holdings,
            &mut branch,
            guard,
            depth.saturating_add(1),
        )?;

        let fuel_units = fuel_units_needed(needed, source.items_per_fuel_unit);
        let fuel_stock = holdings
            .total_of(self.catalog().fuels().iter().map(|fuel| fuel.item.as_str()))
            .unwrap_or(u32::MAX);
        debug!(output, input = %source.input, needed, fuel_units, fuel_stock, "smelting");

        if fuel_stock < fuel_units {
            actions.push(Action::collect(
                self.config().fuel_block.as_str(),
                fuel_units.saturating_sub(fuel_stock),
            ));
        }

        actions.push(Action::smelt(source.input.as_str(), output, needed));
        pending
            .promise(output, needed)
            .ok_or_else(|| ResolveError::overflow("pending smelt output"))?;
        Ok(actions)
    }
}
