//! ShowWalkthroughHandler - Query handler for the step-by-step checklist.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::walkthrough::{self, WalkthroughStep};

/// Query for the walkthrough with one step expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowWalkthroughQuery {
    /// 0-based index of the expanded step.
    pub active: usize,
}

impl ShowWalkthroughQuery {
    /// Query for a 1-based step number as typed by the user.
    pub fn step_number(step: usize) -> Result<Self, DomainError> {
        let active = step.checked_sub(1).ok_or_else(|| {
            DomainError::new(ErrorCode::ValidationFailed, "Walkthrough steps start at 1")
                .with_detail("step", step.to_string())
        })?;
        Ok(Self { active })
    }
}

/// Every step, plus which one is expanded.
#[derive(Debug, Clone)]
pub struct WalkthroughView {
    pub steps: &'static [WalkthroughStep],
    pub active: usize,
}

impl WalkthroughView {
    pub fn active_step(&self) -> &'static WalkthroughStep {
        &self.steps[self.active]
    }
}

#[derive(Debug, Default)]
pub struct ShowWalkthroughHandler;

impl ShowWalkthroughHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ShowWalkthroughQuery) -> Result<WalkthroughView, DomainError> {
        let steps = walkthrough::steps();
        if walkthrough::step(query.active).is_none() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Walkthrough has {} steps", steps.len()),
            )
            .with_detail("step", (query.active + 1).to_string()));
        }
        Ok(WalkthroughView {
            steps,
            active: query.active,
        })
    }
}
