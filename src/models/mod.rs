//! Registration domain models.
//!
//! Typed records for the activity catalog, decoupled from any rendering
//! technology. Only the fields the scheduling core needs are exposed: id,
//! day/time label, cost.
//!
//! # Domain Mappings
//!
//! | Model | Registration form |
//! |-------|-------------------|
//! | Activity | Workshop checkbox |
//! | Catalog | All activity checkboxes on the page |
//! | DayTime | Parsed `data-day-and-time` attribute |
//! | SlotSet | Hours a workshop occupies |

mod activity;
mod catalog;
mod slot;

pub use activity::Activity;
pub use catalog::Catalog;
pub use slot::{DayTime, Meridiem, SlotSet, TimeSlot, Weekday};
