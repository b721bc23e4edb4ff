//! Form session controller.
//!
//! `SchedulerController` owns the selection state and running total for one
//! form session and turns each [`FormEvent`](crate::events::FormEvent) into
//! a list of [`Instruction`](crate::events::Instruction)s.
//!
//! # Algorithm (activity toggle)
//!
//! 1. Look up the activity's cached day/time.
//! 2. Find same-day activities other than itself whose slots overlap.
//! 3. Block (on select) or release (on deselect) each of them.
//! 4. Apply the activity's cost to the running total.

mod config;
mod controller;

pub use config::ControllerConfig;
pub use controller::SchedulerController;
