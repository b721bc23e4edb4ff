//! Event handling for a single form session.

use tracing::{debug, warn};

use super::ControllerConfig;
use crate::cost::RunningTotal;
use crate::error::ScheduleError;
use crate::events::{FormEvent, FormField, Instruction};
use crate::form::{self, PaymentMethod};
use crate::models::Catalog;
use crate::state::{apply_selection_change, SelectionState};
use crate::validation::{checked_fields, validate_submission, Submission};

/// Owns the selection state and running total of one form session.
///
/// Events are handled one at a time through `&mut self`; each handler either
/// commits its whole state change or none of it.
///
/// # Example
///
/// ```
/// use registration_schedule::events::{FormEvent, Instruction};
/// use registration_schedule::models::{Activity, Catalog};
/// use registration_schedule::scheduler::{ControllerConfig, SchedulerController};
///
/// let catalog = Catalog::new(vec![
///     Activity::new("js-frameworks").with_day_and_time("Tuesday 9am-12pm").with_cost(100),
///     Activity::new("express").with_day_and_time("Tuesday 9am-12pm").with_cost(100),
/// ]).unwrap();
/// let mut controller = SchedulerController::new(catalog, ControllerConfig::default());
///
/// let out = controller.handle(FormEvent::ActivityToggled {
///     activity_id: "js-frameworks".into(),
///     checked: true,
/// }).unwrap();
///
/// assert_eq!(out, vec![
///     Instruction::SetBlocked { activity_id: "express".into(), blocked: true },
///     Instruction::SetRunningTotal(100),
/// ]);
/// ```
#[derive(Debug)]
pub struct SchedulerController {
    catalog: Catalog,
    config: ControllerConfig,
    state: SelectionState,
    total: RunningTotal,
}

impl SchedulerController {
    /// Creates a controller with every activity unselected and free.
    pub fn new(catalog: Catalog, config: ControllerConfig) -> Self {
        let state = SelectionState::new(&catalog);
        Self {
            catalog,
            config,
            state,
            total: RunningTotal::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Current running total.
    pub fn total(&self) -> u32 {
        self.total.value()
    }

    /// Instructions that put a freshly loaded page into its initial state.
    pub fn initial_instructions(&self) -> Vec<Instruction> {
        let mut out = vec![Instruction::hide(FormField::OtherTitle)];
        out.extend(form::payment_changed(self.config.default_payment));
        out.push(Instruction::SetRunningTotal(self.total.value()));
        out
    }

    /// Handles one form event.
    ///
    /// # Errors
    /// - [`ScheduleError::NotFound`] for an unknown activity id.
    /// - [`ScheduleError::Blocked`] when checking a blocked activity.
    /// - [`ScheduleError::UnknownPaymentMethod`] for an unrecognised payment value.
    ///
    /// On error the session state is unchanged.
    pub fn handle(&mut self, event: FormEvent) -> Result<Vec<Instruction>, ScheduleError> {
        match event {
            FormEvent::ActivityToggled {
                activity_id,
                checked,
            } => self.on_activity_toggled(&activity_id, checked),
            FormEvent::JobRoleChanged(role) => Ok(form::job_role_changed(&role, &self.config)),
            FormEvent::DesignChanged(design) => Ok(form::design_changed(&design, &self.config)),
            FormEvent::PaymentChanged(method) => {
                let method: PaymentMethod = method.parse()?;
                debug!(%method, "payment method changed");
                Ok(form::payment_changed(method))
            }
            FormEvent::Submit(submission) => Ok(self.on_submit(&submission)),
        }
    }

    fn on_activity_toggled(
        &mut self,
        activity_id: &str,
        checked: bool,
    ) -> Result<Vec<Instruction>, ScheduleError> {
        let cost = self.catalog.require(activity_id)?.cost;

        if self.state.is_selected(activity_id) == checked {
            debug!(activity_id, checked, "repeated toggle ignored");
            return Ok(Vec::new());
        }

        let (state, mut out) = apply_selection_change(
            &self.state,
            &self.catalog,
            activity_id,
            checked,
            self.config.blocking_policy,
        )
        .inspect_err(|e| warn!(activity_id, checked, error = %e, "toggle rejected"))?;

        self.state = state;
        let total = self.total.apply(cost, checked);
        debug!(
            activity_id,
            checked,
            blocked = out.len(),
            total,
            "activity toggled"
        );

        out.push(Instruction::SetRunningTotal(total));
        Ok(out)
    }

    fn on_submit(&self, submission: &Submission) -> Vec<Instruction> {
        let fields = checked_fields(submission.payment);

        match validate_submission(submission, self.state.selected_count()) {
            Ok(()) => {
                debug!("submission accepted");
                let mut out: Vec<Instruction> =
                    fields.into_iter().map(Instruction::ClearInvalid).collect();
                out.push(Instruction::AcceptSubmission);
                out
            }
            Err(errors) => {
                debug!(errors = errors.len(), "submission rejected");
                fields
                    .into_iter()
                    .map(|field| {
                        match errors.iter().find(|e| e.field() == field) {
                            Some(e) => Instruction::MarkInvalid {
                                field,
                                message: e.message.clone(),
                            },
                            None => Instruction::ClearInvalid(field),
                        }
                    })
                    .collect()
            }
        }
    }
}
