//! Conference registration form controller.
//!
//! Detects time conflicts between workshop activities, keeps a running cost
//! total of the selection, toggles conditional fields and validates the form
//! before submission. Nothing here renders: handlers return
//! [`Instruction`](events::Instruction)s for the presentation layer.
//!
//! # Modules
//!
//! - **`models`**: `Activity`, `Catalog`, `Weekday`, `TimeSlot`, `SlotSet`, `DayTime`
//! - **`parser`**: `"Tuesday 9am-12pm"` → day + hour slots
//! - **`conflict`**: slot overlap and same-day competitors
//! - **`state`**: per-activity selected/blocked state and its transition function
//! - **`cost`**: running total accumulator
//! - **`form`**: job title, t-shirt colour and payment panel toggling
//! - **`validation`**: submit-time field checks
//! - **`scheduler`**: `SchedulerController`, one handler per `FormEvent`
//!
//! # Threading
//!
//! Single-threaded and synchronous. A controller handles one event at a time
//! through `&mut self`.

pub mod conflict;
pub mod cost;
pub mod error;
pub mod events;
pub mod form;
pub mod models;
pub mod parser;
pub mod scheduler;
pub mod state;
pub mod validation;

pub use error::ScheduleError;
