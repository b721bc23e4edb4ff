//! Day and hour-slot models.
//!
//! Activity times are reduced to whole-hour slots within a single day.
//!
//! # Slot Model
//! A [`TimeSlot`] is the half-open hour interval `[h, h+1)` in 24-hour
//! form, displayed as `"h-h+1"`. An activity running 11:00–15:00 occupies
//! `{11-12, 12-13, 13-14, 14-15}`. Two activities on the same day conflict
//! iff their [`SlotSet`]s intersect.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Day of the week an activity takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English name as it appears in activity labels.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Case-insensitive match on the full English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown weekday {s:?}"))
    }
}

/// 12-hour clock suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn suffix(&self) -> &'static str {
        match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        }
    }
}

impl FromStr for Meridiem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "am" => Ok(Meridiem::Am),
            "pm" => Ok(Meridiem::Pm),
            other => Err(format!("unknown meridiem {other:?}")),
        }
    }
}

/// A one-hour slot `[start_hour, start_hour + 1)`.
///
/// Ordered by start hour, so a [`SlotSet`] iterates chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start (24-hour clock, inclusive).
    pub start_hour: u8,
}

impl TimeSlot {
    /// Creates the slot starting at `start_hour`.
    pub fn new(start_hour: u8) -> Self {
        Self { start_hour }
    }

    /// Slot end (24-hour clock, exclusive).
    #[inline]
    pub fn end_hour(&self) -> u8 {
        self.start_hour + 1
    }

    /// Canonical `"h-h+1"` label.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_hour, self.end_hour())
    }
}

/// Set of hour slots occupied by one activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSet {
    slots: BTreeSet<TimeSlot>,
}

impl SlotSet {
    /// Creates an empty set (an activity occupying no time).
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots for every hour in `[start_hour, end_hour)`.
    ///
    /// Empty when `start_hour >= end_hour`.
    pub fn from_range(start_hour: u8, end_hour: u8) -> Self {
        (start_hour..end_hour).map(TimeSlot::new).collect()
    }

    /// Adds a slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.insert(slot);
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.slots.contains(slot)
    }

    /// Slots in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    /// Slots shared with `other`.
    pub fn intersection<'a>(&'a self, other: &'a SlotSet) -> impl Iterator<Item = &'a TimeSlot> {
        self.slots.intersection(&other.slots)
    }

    /// Chronological `"h-h+1"` labels.
    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(TimeSlot::label).collect()
    }
}

impl FromIterator<TimeSlot> for SlotSet {
    fn from_iter<I: IntoIterator<Item = TimeSlot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// Parsed day and hour range of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTime {
    pub day: Weekday,
    /// Start hour (24-hour clock, inclusive).
    pub start_hour: u8,
    /// End hour (24-hour clock, exclusive).
    pub end_hour: u8,
    /// Occupied slots, derived from the hour range.
    pub slots: SlotSet,
}

impl DayTime {
    /// Creates a day/time and derives its slots.
    pub fn new(day: Weekday, start_hour: u8, end_hour: u8) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
            slots: SlotSet::from_range(start_hour, end_hour),
        }
    }
}
