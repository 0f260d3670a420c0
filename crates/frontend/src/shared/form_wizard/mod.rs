//! Multi-step form controller.
//!
//! [`WizardState`] is the step machine, [`FormState`] holds the field values
//! and [`FormWizard`] renders both with Back/Next/Submit/Save draft buttons.

pub mod component;
pub mod form_state;
pub mod submit;

pub use component::{FormField, FormReview, FormSelect, FormWizard, WizardStep};
pub use form_state::{FieldDef, FormDefinition, FormError, FormState};
pub use submit::{use_create_form, CreateForm};

/// Position inside an N-step wizard. The index always stays in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    current: usize,
    total: usize,
}

impl WizardState {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// No-op on the last step
    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    /// No-op on the first step
    pub fn previous(&mut self) {
        if !self.is_first() {
            self.current -= 1;
        }
    }

    /// Jump to any step; an out-of-range index is ignored.
    pub fn jump_to(&mut self, step: usize) {
        if step < self.total {
            self.current = step;
        }
    }
}

/// Rejects a second submission while one is in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns false if a submission is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_step_navigation() {
        let mut w = WizardState::new(4);
        w.previous();
        assert_eq!(w.current(), 0);

        w.jump_to(3);
        assert!(w.is_last());
        w.next();
        assert_eq!(w.current(), 3);

        w.jump_to(2);
        assert_eq!(w.current(), 2);
        w.previous();
        assert_eq!(w.current(), 1);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut w = WizardState::new(4);
        w.jump_to(1);
        w.jump_to(4);
        w.jump_to(usize::MAX);
        assert_eq!(w.current(), 1);
    }

    #[test]
    fn test_zero_steps_is_one_step() {
        let mut w = WizardState::new(0);
        assert!(w.is_first() && w.is_last());
        w.next();
        assert_eq!(w.current(), 0);
    }

    #[test]
    fn test_submit_guard() {
        let mut guard = SubmitGuard::default();
        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        assert!(guard.in_flight());
        guard.finish();
        assert!(guard.try_begin());
    }
}
