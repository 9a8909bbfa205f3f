//! Calculator tool services.
//!
//! Each runner performs the screen flow: gate, compute, record. A denied
//! gate short-circuits to [`ToolOutcome::LoginRequired`] without computing
//! anything.

use std::sync::Arc;

use toolsewa_core::error::Result;
use toolsewa_core::tools::gratuity::{self, GratuityInput, GratuityResult};
use toolsewa_core::tools::gst::{self, GstBreakdown, GstInput};
use toolsewa_core::tools::provident_fund::{self, EpfInput, EpfProjection};
use toolsewa_core::tools::salary::{self, SalaryBreakdown, SalaryInput};

use crate::session_usecase::SessionUseCase;

/// Outcome of one gated tool action.
///
/// A denied gate is normal control flow; errors are reserved for
/// infrastructure failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome<T> {
    /// The action ran; here is its result.
    Completed(T),
    /// The free limit is exhausted; the login prompt has been raised.
    LoginRequired,
}

impl<T> ToolOutcome<T> {
    /// The result, if the action ran.
    pub fn completed(self) -> Option<T> {
        match self {
            ToolOutcome::Completed(value) => Some(value),
            ToolOutcome::LoginRequired => None,
        }
    }

    /// True when the gate blocked the action.
    pub fn is_login_required(&self) -> bool {
        matches!(self, ToolOutcome::LoginRequired)
    }
}

/// Runs the calculator tools against the session gate.
pub struct ToolRunner {
    session: Arc<SessionUseCase>,
}

impl ToolRunner {
    pub fn new(session: Arc<SessionUseCase>) -> Self {
        Self { session }
    }

    /// Salary calculator screen flow.
    pub fn run_salary(&self, input: &SalaryInput) -> Result<ToolOutcome<SalaryBreakdown>> {
        if !self.session.request_gate()?.is_granted() {
            return Ok(ToolOutcome::LoginRequired);
        }
        let breakdown = salary::calculate(input);
        self.session
            .record_activity("salary-calc", "Salary Calculator", &breakdown.summary())?;
        Ok(ToolOutcome::Completed(breakdown))
    }

    /// GST calculator screen flow.
    pub fn run_gst(&self, input: &GstInput) -> Result<ToolOutcome<GstBreakdown>> {
        if !self.session.request_gate()?.is_granted() {
            return Ok(ToolOutcome::LoginRequired);
        }
        let breakdown = gst::calculate(input);
        self.session
            .record_activity("gst-calc", "GST Calculator", &breakdown.summary())?;
        Ok(ToolOutcome::Completed(breakdown))
    }

    /// Gratuity calculator screen flow.
    pub fn run_gratuity(&self, input: &GratuityInput) -> Result<ToolOutcome<GratuityResult>> {
        if !self.session.request_gate()?.is_granted() {
            return Ok(ToolOutcome::LoginRequired);
        }
        let result = gratuity::calculate(input);
        self.session
            .record_activity("gratuity-calc", "Gratuity Calculator", &result.summary())?;
        Ok(ToolOutcome::Completed(result))
    }

    /// EPF calculator screen flow.
    pub fn run_provident_fund(&self, input: &EpfInput) -> Result<ToolOutcome<EpfProjection>> {
        if !self.session.request_gate()?.is_granted() {
            return Ok(ToolOutcome::LoginRequired);
        }
        let projection = provident_fund::calculate(input);
        self.session
            .record_activity("pf-calc", "EPF Calculator", &projection.summary())?;
        Ok(ToolOutcome::Completed(projection))
    }
}
