//! Recursive dependency resolution.
//!
//! [`Resolver::resolve`] expands "I want `target` of `item`" into the
//! primitive [`Action`]s that produce it, walking the recipe tree depth
//! first:
//!
//! 1. Already held plus already promised covers the target: nothing to do.
//! 2. Not a catalog item but a block of that name: collect it.
//! 3. Obtained by smelting: hand off to the smelting expansion.
//! 4. No recipe: a raw material, collect it from its source block.
//! 5. Otherwise pick a recipe, expand every ingredient for the full craft
//!    multiplier, then craft.
//!
//! Quantities are cumulative targets, never increments. Every sibling
//! ingredient is expanded against its own copy of the promise map, so one
//! branch never counts on output promised in another; the merge step
//! afterwards sums their independent demands. Circular recipes are
//! rejected using the ancestry of the current path only, and an explicit
//! depth ceiling bounds everything else.
//!
//! Resolution is pure: it reads the catalog and the caller's holdings and
//! returns a fresh plan. Concurrent calls need no coordination.

use craftplan_catalog::Catalog;
use craftplan_types::{Action, Holdings, Pending};
use tracing::{debug, info, warn};

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::merge::merge;
use crate::selector::RecipeSelector;

// ---------------------------------------------------------------------------
// CycleGuard
// ---------------------------------------------------------------------------

/// The crafted items currently being expanded on the active path.
///
/// Each frame borrows its parent, so descending never copies and sibling
/// branches cannot see each other's frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleGuard<'a> {
    frame: Option<(&'a str, &'a CycleGuard<'a>)>,
}

impl<'a> CycleGuard<'a> {
    /// A guard with no ancestors.
    pub const fn root() -> Self {
        Self { frame: None }
    }

    /// A child guard with `item` added on top of this path.
    pub const fn with<'b>(&'b self, item: &'b str) -> CycleGuard<'b>
    where
        'a: 'b,
    {
        CycleGuard {
            frame: Some((item, self)),
        }
    }

    /// Whether `item` is already on the path.
    pub fn contains(&self, item: &str) -> bool {
        let mut cursor = self;
        while let Some((name, parent)) = cursor.frame {
            if name == item {
                return true;
            }
            cursor = parent;
        }
        false
    }

    /// Items on the path, outermost first.
    pub fn path(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = self;
        while let Some((name, parent)) = cursor.frame {
            names.push(name.to_owned());
            cursor = parent;
        }
        names.reverse();
        names
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Expands item requests into plans against a read-only catalog.
#[derive(Clone, Copy)]
pub struct Resolver<'c> {
    catalog: &'c dyn Catalog,
    config: &'c ResolverConfig,
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'c> Resolver<'c> {
    /// A resolver reading `catalog`.
    pub const fn new(catalog: &'c dyn Catalog, config: &'c ResolverConfig) -> Self {
        Self { catalog, config }
    }

    /// The selector this resolver ranks recipes with.
    pub fn selector(&self) -> RecipeSelector<'c> {
        let catalog: &'c dyn Catalog = self.catalog;
        RecipeSelector::new(catalog.preferences())
    }

    /// Resolve `target` total units of `item` into an unmerged action list.
    ///
    /// `pending` carries output promised by earlier requests in the same
    /// session; on success it is updated with what this plan promises, so
    /// several goals can be resolved one after another against it. On
    /// failure it is left untouched.
    pub fn resolve(
        &self,
        item: &str,
        target: u32,
        holdings: &Holdings,
        pending: &mut Pending,
    ) -> Result<Vec<Action>, ResolveError> {
        self.resolve_guarded(item, target, holdings, pending, &CycleGuard::root())
    }

    /// [`Resolver::resolve`] below an existing ancestry.
    pub fn resolve_guarded(
        &self,
        item: &str,
        target: u32,
        holdings: &Holdings,
        pending: &mut Pending,
        guard: &CycleGuard<'_>,
    ) -> Result<Vec<Action>, ResolveError> {
        let mut scratch = pending.clone();
        let actions = self.expand(item, target, holdings, &mut scratch, guard, 0)?;
        *pending = scratch;
        Ok(actions)
    }

    /// Resolve and merge a single goal into a final plan.
    pub fn plan(
        &self,
        item: &str,
        target: u32,
        holdings: &Holdings,
    ) -> Result<Vec<Action>, ResolveError> {
        self.plan_all(&[(item, target)], holdings)
    }

    /// Resolve several goals in order against one shared promise map, then
    /// merge everything into one plan. Any infeasible goal fails the lot.
    pub fn plan_all(
        &self,
        goals: &[(&str, u32)],
        holdings: &Holdings,
    ) -> Result<Vec<Action>, ResolveError> {
        let mut pending = Pending::new();
        let mut raw = Vec::new();
        for &(item, target) in goals {
            match self.resolve(item, target, holdings, &mut pending) {
                Ok(actions) => raw.extend(actions),
                Err(err) => {
                    warn!(item, target, reason = err.reason(), %err, "request is infeasible");
                    return Err(err);
                }
            }
        }
        let raw_len = raw.len();
        let plan = merge(raw);
        info!(goals = goals.len(), raw_steps = raw_len, steps = plan.len(), "plan resolved");
        Ok(plan)
    }

    /// Whether `target` units of `item` could be produced from `holdings`.
    pub fn can_make(&self, item: &str, target: u32, holdings: &Holdings) -> bool {
        self.resolve(item, target, holdings, &mut Pending::new()).is_ok()
    }

    /// The block to mine for `item`.
    pub(crate) fn block_for<'i>(&self, item: &'i str) -> &'i str
    where
        'c: 'i,
    {
        let catalog: &'c dyn Catalog = self.catalog;
        catalog.block_source(item).unwrap_or(item)
    }

    pub(crate) const fn catalog(&self) -> &'c dyn Catalog {
        self.catalog
    }

    pub(crate) const fn config(&self) -> &'c ResolverConfig {
        self.config
    }

    /// One recursive expansion step. `pending` is the caller-visible map
    /// that this step adds its promised output to.
    pub(crate) fn expand(
        &self,
        item: &str,
        target: u32,
        holdings: &Holdings,
        pending: &mut Pending,
        guard: &CycleGuard<'_>,
        depth: usize,
    ) -> Result<Vec<Action>, ResolveError> {
        if depth > self.config.max_depth {
            return Err(ResolveError::DepthExceeded {
                item: item.to_owned(),
                limit: self.config.max_depth,
            });
        }

        let have = holdings.get(item).saturating_add(pending.get(item));
        if have >= target {
            return Ok(Vec::new());
        }
        let needed = target.saturating_sub(have);
        debug!(item, target, have, needed, depth, "expanding");

        if !self.catalog.item_exists(item) {
            if self.catalog.block_exists(item) {
                return Ok(vec![Action::collect(self.block_for(item), needed)]);
            }
            return Err(ResolveError::UnknownItem {
                item: item.to_owned(),
            });
        }

        if let Some(source) = self.catalog.smelting_source(item) {
            return self.expand_smelting(item, source, needed, holdings, pending, guard, depth);
        }

        let recipes = self.catalog.recipes(item);
        if recipes.is_empty() {
            return Ok(vec![Action::collect(self.block_for(item), needed)]);
        }

        if guard.contains(item) {
            let mut path = guard.path();
            path.push(item.to_owned());
            return Err(ResolveError::Circular {
                item: item.to_owned(),
                path,
            });
        }
        let guard = guard.with(item);

        let selector = self.selector();
        let recipe = selector.select(recipes).ok_or_else(|| ResolveError::NoRecipe {
            item: item.to_owned(),
        })?;
        let output_per_craft = recipe.output_count.max(1);
        let multiplier = needed.div_ceil(output_per_craft);

        let mut actions = Vec::new();
        for ingredient in &recipe.ingredients {
            let Some(choice) = selector.pick_option(ingredient) else {
                continue;
            };
            let demand = ingredient
                .count
                .checked_mul(multiplier)
                .ok_or_else(|| ResolveError::overflow("ingredient demand"))?;
            let mut branch = pending.clone();
            let sub = self.expand(
                choice,
                demand,
                holdings,
                &mut branch,
                &guard,
                depth.saturating_add(1),
            )?;
            actions.extend(sub);
        }

        actions.push(Action::craft(item, target));
        let produced = multiplier
            .checked_mul(output_per_craft)
            .ok_or_else(|| ResolveError::overflow("craft output"))?;
        pending
            .promise(item, produced)
            .ok_or_else(|| ResolveError::overflow("pending promise"))?;
        Ok(actions)
    }
}
