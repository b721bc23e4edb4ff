//! Per-activity selection state and its transition function.
//!
//! # Model
//! Each activity is `Unselected+Free`, `Unselected+Blocked`, or
//! `Selected+Free`. `Selected+Blocked` is unreachable: a blocked activity
//! cannot be selected.
//!
//! `blocked` is derived from `blocked_by`, the set of *other* selected
//! activities that overlap this one on the same day. An activity never
//! appears in its own `blocked_by`.
//!
//! # Transition
//! [`apply_selection_change`] borrows the current state and returns a new
//! one together with the instructions the presentation layer must apply.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::conflict::competitors;
use crate::error::ScheduleError;
use crate::events::Instruction;
use crate::models::Catalog;

/// How a deselection releases the activities it blocked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockingPolicy {
    /// Each competitor tracks every selected activity blocking it and stays
    /// blocked until the last one is deselected.
    #[default]
    Counted,
    /// Deselecting an activity frees every competitor, even if another
    /// selected activity still overlaps it.
    LastWriter,
}

/// Selection and blocking state of one activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityState {
    /// Set by direct user action.
    pub selected: bool,
    /// Selected activities currently blocking this one.
    pub blocked_by: BTreeSet<String>,
}

impl ActivityState {
    /// Whether another selection blocks this activity.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        !self.blocked_by.is_empty()
    }
}

/// Selection state of every activity in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    entries: HashMap<String, ActivityState>,
}

impl SelectionState {
    /// All catalog activities `Unselected+Free`.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            entries: catalog
                .activities()
                .iter()
                .map(|a| (a.id.clone(), ActivityState::default()))
                .collect(),
        }
    }

    pub fn get(&self, activity_id: &str) -> Option<&ActivityState> {
        self.entries.get(activity_id)
    }

    pub fn is_selected(&self, activity_id: &str) -> bool {
        self.get(activity_id).is_some_and(|s| s.selected)
    }

    pub fn is_blocked(&self, activity_id: &str) -> bool {
        self.get(activity_id).is_some_and(ActivityState::is_blocked)
    }

    /// Ids of selected activities (unordered).
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, s)| s.selected)
            .map(|(id, _)| id.as_str())
    }

    pub fn selected_count(&self) -> usize {
        self.entries.values().filter(|s| s.selected).count()
    }

    fn entry_mut(&mut self, activity_id: &str) -> &mut ActivityState {
        self.entries.entry(activity_id.to_string()).or_default()
    }
}

/// Applies one checkbox change and returns the resulting state.
///
/// Emits one [`Instruction::SetBlocked`] per same-day, time-overlapping
/// competitor of `activity_id`, in catalog order. The input state is never
/// modified, so a failed transition leaves the caller's state intact.
///
/// Calling this twice with the same arguments is harmless for blocking but
/// the caller must not double-apply the cost; see
/// [`SchedulerController`](crate::scheduler::SchedulerController).
///
/// # Errors
/// - [`ScheduleError::NotFound`] if the id is not in the catalog.
/// - [`ScheduleError::Blocked`] when selecting a blocked activity, or one
///   that overlaps an already selected activity.
pub fn apply_selection_change(
    state: &SelectionState,
    catalog: &Catalog,
    activity_id: &str,
    now_selected: bool,
    policy: BlockingPolicy,
) -> Result<(SelectionState, Vec<Instruction>), ScheduleError> {
    catalog.require(activity_id)?;
    let rivals = competitors(catalog, activity_id);

    if now_selected {
        // Under LastWriter a competitor can be freed while an overlapping
        // selection remains, so selected competitors are checked directly.
        let mut blocked_by: BTreeSet<String> = state
            .get(activity_id)
            .map(|s| s.blocked_by.clone())
            .unwrap_or_default();
        blocked_by.extend(
            rivals
                .iter()
                .filter(|other| state.is_selected(&other.id))
                .map(|other| other.id.clone()),
        );
        if !blocked_by.is_empty() {
            return Err(ScheduleError::Blocked {
                activity_id: activity_id.to_string(),
                blocked_by: blocked_by.into_iter().collect(),
            });
        }
    }

    let mut next = state.clone();
    next.entry_mut(activity_id).selected = now_selected;

    let mut effects = Vec::new();
    for other in rivals {
        let entry = next.entry_mut(&other.id);
        match (now_selected, policy) {
            (true, _) => {
                entry.blocked_by.insert(activity_id.to_string());
            }
            (false, BlockingPolicy::Counted) => {
                entry.blocked_by.remove(activity_id);
            }
            (false, BlockingPolicy::LastWriter) => {
                entry.blocked_by.clear();
            }
        }
        effects.push(Instruction::SetBlocked {
            activity_id: other.id.clone(),
            blocked: entry.is_blocked(),
        });
    }

    Ok((next, effects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Activity::new("all").with_cost(200),
            Activity::new("js-frameworks")
                .with_day_and_time("Tuesday 9am-12pm")
                .with_cost(100),
            Activity::new("express")
                .with_day_and_time("Tuesday 9am-12pm")
                .with_cost(100),
            Activity::new("early-express")
                .with_day_and_time("Tuesday 11am-1pm")
                .with_cost(50),
            Activity::new("js-libs")
                .with_day_and_time("Tuesday 1pm-4pm")
                .with_cost(100),
            Activity::new("build-tools")
                .with_day_and_time("Wednesday 9am-12pm")
                .with_cost(100),
        ])
        .unwrap()
    }

    fn blocked(id: &str, blocked: bool) -> Instruction {
        Instruction::SetBlocked {
            activity_id: id.into(),
            blocked,
        }
    }

    #[test]
    fn test_initial_state() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog);
        for act in catalog.activities() {
            assert!(!state.is_selected(&act.id));
            assert!(!state.is_blocked(&act.id));
        }
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_select_blocks_competitors() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog);

        let (state, effects) =
            apply_selection_change(&state, &catalog, "js-frameworks", true, BlockingPolicy::Counted)
                .unwrap();

        assert!(state.is_selected("js-frameworks"));
        assert!(!state.is_blocked("js-frameworks"));
        assert!(state.is_blocked("express"));
        assert!(state.is_blocked("early-express"));
        assert!(!state.is_blocked("js-libs"));
        assert!(!state.is_blocked("build-tools"));
        assert_eq!(
            effects,
            vec![blocked("express", true), blocked("early-express", true)]
        );
    }

    #[test]
    fn test_deselect_restores_competitor() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog);
        let (state, _) =
            apply_selection_change(&state, &catalog, "express", true, BlockingPolicy::Counted)
                .unwrap();
        assert!(state.is_blocked("js-frameworks"));

        let (state, effects) =
            apply_selection_change(&state, &catalog, "express", false, BlockingPolicy::Counted)
                .unwrap();
        assert!(!state.is_blocked("js-frameworks"));
        assert!(effects.contains(&blocked("js-frameworks", false)));
    }

    #[test]
    fn test_counted_keeps_block_while_another_blocker_selected() {
        // morning and midday do not overlap each other; both overlap long.
        let catalog = Catalog::new(vec![
            Activity::new("morning").with_day_and_time("Tuesday 9am-11am"),
            Activity::new("midday").with_day_and_time("Tuesday 11am-1pm"),
            Activity::new("long").with_day_and_time("Tuesday 10am-12pm"),
        ])
        .unwrap();
        let state = SelectionState::new(&catalog);
        let (state, _) =
            apply_selection_change(&state, &catalog, "morning", true, BlockingPolicy::Counted)
                .unwrap();
        let (state, _) =
            apply_selection_change(&state, &catalog, "midday", true, BlockingPolicy::Counted)
                .unwrap();
        assert_eq!(state.get("long").unwrap().blocked_by.len(), 2);

        let (state, effects) =
            apply_selection_change(&state, &catalog, "morning", false, BlockingPolicy::Counted)
                .unwrap();
        assert!(state.is_blocked("long"));
        assert_eq!(effects, vec![blocked("long", true)]);
    }

    #[test]
    fn test_last_writer_frees_despite_other_blocker() {
        let catalog = Catalog::new(vec![
            Activity::new("morning").with_day_and_time("Tuesday 9am-11am"),
            Activity::new("midday").with_day_and_time("Tuesday 11am-1pm"),
            Activity::new("long").with_day_and_time("Tuesday 10am-12pm"),
        ])
        .unwrap();
        let policy = BlockingPolicy::LastWriter;
        let state = SelectionState::new(&catalog);
        let (state, _) = apply_selection_change(&state, &catalog, "morning", true, policy).unwrap();
        let (state, _) = apply_selection_change(&state, &catalog, "midday", true, policy).unwrap();

        let (state, effects) =
            apply_selection_change(&state, &catalog, "morning", false, policy).unwrap();
        assert!(!state.is_blocked("long"));
        assert_eq!(effects, vec![blocked("long", false)]);
    }

    #[test]
    fn test_last_writer_rejects_overlap_with_selected_activity() {
        let catalog = Catalog::new(vec![
            Activity::new("morning").with_day_and_time("Tuesday 9am-11am"),
            Activity::new("midday").with_day_and_time("Tuesday 11am-1pm"),
            Activity::new("long").with_day_and_time("Tuesday 10am-12pm"),
        ])
        .unwrap();
        let policy = BlockingPolicy::LastWriter;
        let state = SelectionState::new(&catalog);
        let (state, _) = apply_selection_change(&state, &catalog, "morning", true, policy).unwrap();
        let (state, _) = apply_selection_change(&state, &catalog, "midday", true, policy).unwrap();
        let (state, _) = apply_selection_change(&state, &catalog, "morning", false, policy).unwrap();
        assert!(!state.is_blocked("long"));

        let err = apply_selection_change(&state, &catalog, "long", true, policy).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Blocked { ref blocked_by, .. } if blocked_by == &vec!["midday".to_string()]
        ));
        assert!(state.is_selected("midday"));
        assert!(!state.is_blocked("midday"));
        assert!(!state.is_selected("long"));
    }

    #[test]
    fn test_select_blocked_activity_rejected() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog);
        let (state, _) =
            apply_selection_change(&state, &catalog, "js-frameworks", true, BlockingPolicy::Counted)
                .unwrap();

        let err =
            apply_selection_change(&state, &catalog, "express", true, BlockingPolicy::Counted)
                .unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Blocked { ref blocked_by, .. } if blocked_by == &vec!["js-frameworks".to_string()]
        ));
    }

    #[test]
    fn test_unknown_activity_leaves_state_untouched() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog);
        let before = state.clone();

        let err = apply_selection_change(&state, &catalog, "missing", true, BlockingPolicy::Counted)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::NotFound(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_untimed_activity_emits_nothing() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog);
        let (state, effects) =
            apply_selection_change(&state, &catalog, "all", true, BlockingPolicy::Counted).unwrap();
        assert!(state.is_selected("all"));
        assert!(effects.is_empty());
    }
}
