//! Time-conflict detection between activities.
//!
//! Two activities conflict iff they fall on the same day and share at least
//! one hour slot. An activity is never its own competitor; exclusion is by
//! id, not by slot comparison.
//!
//! # Complexity
//! `slots_overlap` is O(min(n, m) log max(n, m)) over ordered sets;
//! activities occupy at most a handful of slots.

use crate::models::{Activity, Catalog, SlotSet};

/// Whether two slot sets share at least one slot.
///
/// # Example
///
/// ```
/// use registration_schedule::conflict::slots_overlap;
/// use registration_schedule::models::SlotSet;
///
/// assert!(slots_overlap(&SlotSet::from_range(9, 11), &SlotSet::from_range(10, 12)));
/// assert!(!slots_overlap(&SlotSet::from_range(9, 10), &SlotSet::from_range(11, 12)));
/// ```
pub fn slots_overlap(a: &SlotSet, b: &SlotSet) -> bool {
    a.intersection(b).next().is_some()
}

/// Other activities on the same day whose slots overlap `activity_id`.
///
/// Returned in catalog order. Empty when the activity is unknown, untimed,
/// or has a malformed label.
pub fn competitors<'a>(catalog: &'a Catalog, activity_id: &str) -> Vec<&'a Activity> {
    let Some(own) = catalog.timing(activity_id) else {
        return Vec::new();
    };

    catalog
        .on_day(own.day)
        .filter(|(other, _)| other.id != activity_id)
        .filter(|(_, timing)| slots_overlap(&own.slots, &timing.slots))
        .map(|(other, _)| other)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, TimeSlot};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Activity::new("all").with_cost(200),
            Activity::new("js-frameworks")
                .with_day_and_time("Tuesday 9am-12pm")
                .with_cost(100),
            Activity::new("js-libs")
                .with_day_and_time("Tuesday 1pm-4pm")
                .with_cost(100),
            Activity::new("express")
                .with_day_and_time("Tuesday 9am-12pm")
                .with_cost(100),
            Activity::new("node")
                .with_day_and_time("Tuesday 1pm-4pm")
                .with_cost(100),
            Activity::new("build-tools")
                .with_day_and_time("Wednesday 9am-12pm")
                .with_cost(100),
            Activity::new("npm")
                .with_day_and_time("Wednesday 1pm-4pm")
                .with_cost(100),
        ])
        .unwrap()
    }

    #[test]
    fn test_slots_overlap() {
        let a = SlotSet::new()
            .with_slot(TimeSlot::new(9))
            .with_slot(TimeSlot::new(10));
        let b = SlotSet::new()
            .with_slot(TimeSlot::new(10))
            .with_slot(TimeSlot::new(11));
        assert!(slots_overlap(&a, &b));
        assert!(slots_overlap(&b, &a));
    }

    #[test]
    fn test_slots_disjoint() {
        let a = SlotSet::new().with_slot(TimeSlot::new(9));
        let b = SlotSet::new().with_slot(TimeSlot::new(11));
        assert!(!slots_overlap(&a, &b));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        // 9-12 and 12-3 touch at noon only.
        assert!(!slots_overlap(
            &SlotSet::from_range(9, 12),
            &SlotSet::from_range(12, 15)
        ));
    }

    #[test]
    fn test_empty_set_never_overlaps() {
        assert!(!slots_overlap(&SlotSet::new(), &SlotSet::from_range(0, 24)));
    }

    #[test]
    fn test_competitors_same_day_overlap() {
        let catalog = catalog();
        let ids: Vec<&str> = competitors(&catalog, "js-frameworks")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["express"]);
    }

    #[test]
    fn test_competitors_exclude_self_and_other_days() {
        let catalog = catalog();
        let ids: Vec<&str> = competitors(&catalog, "build-tools")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_competitors_untimed_and_unknown() {
        let catalog = catalog();
        assert!(competitors(&catalog, "all").is_empty());
        assert!(competitors(&catalog, "missing").is_empty());
    }
}
