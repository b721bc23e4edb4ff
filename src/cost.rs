//! Running cost total of selected activities.
//!
//! The total is updated incrementally on each toggle, and is always equal to
//! the sum of `cost` over selected activities ([`RunningTotal::recompute`]).
//!
//! The accumulator trusts the `selected` flag it is given and performs no
//! deduplication. Applying the same toggle twice corrupts the total, so the
//! controller guards against repeated events before calling it.

use serde::{Deserialize, Serialize};

use crate::models::Catalog;
use crate::state::SelectionState;

/// Adds `cost` when an activity becomes selected, subtracts it when it
/// becomes deselected. Saturates at zero.
///
/// # Example
///
/// ```
/// use registration_schedule::cost::apply_cost_delta;
///
/// assert_eq!(apply_cost_delta(100, 25, true), 125);
/// assert_eq!(apply_cost_delta(125, 25, false), 100);
/// ```
#[inline]
pub fn apply_cost_delta(total: u32, cost: u32, selected: bool) -> u32 {
    if selected {
        total.saturating_add(cost)
    } else {
        total.saturating_sub(cost)
    }
}

/// Total cost of the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotal(u32);

impl RunningTotal {
    /// A zero total.
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Applies one toggle's cost delta.
    pub fn apply(&mut self, cost: u32, selected: bool) -> u32 {
        self.0 = apply_cost_delta(self.0, cost, selected);
        self.0
    }

    /// Sum of `cost` over all selected activities.
    pub fn recompute(catalog: &Catalog, state: &SelectionState) -> Self {
        Self(
            catalog
                .activities()
                .iter()
                .filter(|a| state.is_selected(&a.id))
                .fold(0u32, |acc, a| acc.saturating_add(a.cost)),
        )
    }
}
