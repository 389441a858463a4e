//! The plan as an executor consumes it.
//!
//! Executing a plan happens outside this crate, one action at a time
//! against a live world. [`PlanQueue`] is the owned state that executor
//! works from: it hands out one step at a time behind a busy flag, accepts
//! corrective steps at the front when a run-time prerequisite turns out to
//! be missing, is replaced wholesale by a new request, and is emptied by
//! any failure.

use std::collections::VecDeque;

use craftplan_types::Action;

/// Ordered, single-dispatch queue of plan steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanQueue {
    steps: VecDeque<Action>,
    busy: bool,
}

impl PlanQueue {
    /// An empty, idle queue.
    pub const fn new() -> Self {
        Self {
            steps: VecDeque::new(),
            busy: false,
        }
    }

    /// Discard the outstanding plan and start over with `plan`.
    ///
    /// Returns the discarded steps. Any in-flight step is considered
    /// cancelled, so the queue is idle afterwards.
    pub fn replace(&mut self, plan: impl IntoIterator<Item = Action>) -> Vec<Action> {
        let discarded = self.steps.drain(..).collect();
        self.steps.extend(plan);
        self.busy = false;
        discarded
    }

    /// Take the next step for dispatch.
    ///
    /// Returns `None` while a step is in flight or when the queue is empty.
    pub fn begin(&mut self) -> Option<Action> {
        if self.busy {
            return None;
        }
        let next = self.steps.pop_front()?;
        self.busy = true;
        Some(next)
    }

    /// Mark the in-flight step as finished.
    pub const fn complete(&mut self) {
        self.busy = false;
    }

    /// Queue corrective steps ahead of everything else, keeping their order.
    pub fn insert_front(&mut self, actions: impl IntoIterator<Item = Action>) {
        let actions: Vec<Action> = actions.into_iter().collect();
        for action in actions.into_iter().rev() {
            self.steps.push_front(action);
        }
    }

    /// Abandon the whole plan after `failed` could not be carried out.
    ///
    /// Returns the single message to surface to whoever made the request.
    pub fn fail(&mut self, failed: &Action, reason: &str) -> String {
        let dropped = self.steps.len();
        self.steps.clear();
        self.busy = false;
        tracing::warn!(step = %failed, reason, dropped, "plan abandoned");
        format!("Could not {failed}: {reason}")
    }

    /// The next step without taking it.
    pub fn peek(&self) -> Option<&Action> {
        self.steps.front()
    }

    /// Whether a step is currently in flight.
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Steps still waiting for dispatch.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps are waiting.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// How many crafts a `Craft { count: target_total }` step really needs,
/// given `held` units already in the inventory at execution time.
pub fn craft_repeats(target_total: u32, held: u32, output_per_craft: u32) -> u32 {
    target_total
        .saturating_sub(held)
        .div_ceil(output_per_craft.max(1))
}
