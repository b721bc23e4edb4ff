//! Activity catalog.
//!
//! The read-only set of activities offered for a form session, in markup
//! order. Each timed activity's label is parsed once at construction and the
//! resulting [`DayTime`] is cached for the catalog's lifetime.
//!
//! # Fail-soft parsing
//! A malformed label does not reject the catalog. The activity is kept with
//! no occupied slots, a warning is logged, and the error is retained in
//! [`Catalog::format_errors`].

use std::collections::HashMap;

use tracing::warn;

use super::{Activity, DayTime, Weekday};
use crate::error::ScheduleError;
use crate::parser::parse_day_and_time;

/// Ordered, immutable collection of activities with cached timings.
#[derive(Debug)]
pub struct Catalog {
    activities: Vec<Activity>,
    timings: Vec<Option<DayTime>>,
    index: HashMap<String, usize>,
    format_errors: Vec<ScheduleError>,
}

impl Catalog {
    /// Builds a catalog, parsing every day/time label.
    ///
    /// # Errors
    /// [`ScheduleError::DuplicateActivity`] if two activities share an id.
    pub fn new(activities: Vec<Activity>) -> Result<Self, ScheduleError> {
        let mut index = HashMap::with_capacity(activities.len());
        let mut timings = Vec::with_capacity(activities.len());
        let mut format_errors = Vec::new();

        for (i, act) in activities.iter().enumerate() {
            if index.insert(act.id.clone(), i).is_some() {
                return Err(ScheduleError::DuplicateActivity(act.id.clone()));
            }

            let timing = match act.day_and_time.as_deref() {
                None => None,
                Some(label) => match parse_day_and_time(label) {
                    Ok(dt) => Some(dt),
                    Err(e) => {
                        warn!(activity_id = %act.id, error = %e, "skipping conflict detection");
                        format_errors.push(e);
                        None
                    }
                },
            };
            timings.push(timing);
        }

        Ok(Self {
            activities,
            timings,
            index,
            format_errors,
        })
    }

    /// Deserializes a JSON array of activities and builds a catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use registration_schedule::models::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"[
    ///     {"id": "all", "name": "Main Conference", "cost": 200},
    ///     {"id": "js-frameworks", "dayAndTime": "Tuesday 9am-12pm", "cost": 100}
    /// ]"#).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        let activities: Vec<Activity> = serde_json::from_str(json)?;
        Self::new(activities)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activities in catalog order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Whether an id is in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up an activity by id.
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.index.get(id).map(|&i| &self.activities[i])
    }

    /// Looks up an activity, failing with [`ScheduleError::NotFound`].
    pub fn require(&self, id: &str) -> Result<&Activity, ScheduleError> {
        self.get(id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))
    }

    /// Cached day/time of an activity. `None` if untimed, malformed, or unknown.
    pub fn timing(&self, id: &str) -> Option<&DayTime> {
        self.index.get(id).and_then(|&i| self.timings[i].as_ref())
    }

    /// Activities paired with their cached timing, in catalog order.
    pub fn iter_timed(&self) -> impl Iterator<Item = (&Activity, &DayTime)> {
        self.activities
            .iter()
            .zip(&self.timings)
            .filter_map(|(a, t)| t.as_ref().map(|t| (a, t)))
    }

    /// Timed activities on a given day, in catalog order.
    pub fn on_day(&self, day: Weekday) -> impl Iterator<Item = (&Activity, &DayTime)> {
        self.iter_timed().filter(move |(_, t)| t.day == day)
    }

    /// Label parse failures encountered at construction.
    pub fn format_errors(&self) -> &[ScheduleError] {
        &self.format_errors
    }
}
