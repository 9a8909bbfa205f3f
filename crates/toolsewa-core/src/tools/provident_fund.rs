//! EPF maturity projection.

use super::format_inr;

/// Input for the EPF projection.
#[derive(Debug, Clone, Copy)]
pub struct EpfInput {
    /// Current monthly basic pay
    pub monthly_basic: f64,
    pub current_age: u32,
    pub retirement_age: u32,
    /// Annual interest rate in percent
    pub interest_rate: f64,
    /// Expected annual increment of basic pay in percent
    pub annual_increase: f64,
}

/// Projected corpus at retirement, rounded to whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpfProjection {
    pub maturity: i64,
    pub employee_share: i64,
    pub employer_share: i64,
    pub interest_earned: i64,
}

impl EpfProjection {
    /// Display string for the activity log.
    pub fn summary(&self) -> String {
        format!("Maturity: ₹{}", format_inr(self.maturity))
    }
}

/// Employee contribution: 12% of basic.
const EMPLOYEE_RATE: f64 = 0.12;
/// Employer contribution routed to PF: 3.67% (the rest funds the pension scheme).
const EMPLOYER_PF_RATE: f64 = 0.0367;

/// Projects the EPF corpus with annual compounding.
///
/// Each year contributes employee and employer shares on that year's basic,
/// earns interest on the running balance plus the year's contribution, then
/// applies the annual increment. A retirement age at or below the current
/// age projects zero.
pub fn calculate(input: &EpfInput) -> EpfProjection {
    let years = input.retirement_age.saturating_sub(input.current_age);

    let mut balance = 0.0_f64;
    let mut total_employee = 0.0_f64;
    let mut total_employer = 0.0_f64;
    let mut basic = input.monthly_basic;

    for _ in 0..years {
        let yearly_basic = basic * 12.0;
        let employee_yearly = yearly_basic * EMPLOYEE_RATE;
        let employer_yearly = yearly_basic * EMPLOYER_PF_RATE;

        total_employee += employee_yearly;
        total_employer += employer_yearly;

        let contribution = employee_yearly + employer_yearly;
        let interest = (balance + contribution) * (input.interest_rate / 100.0);
        balance += contribution + interest;

        basic += basic * (input.annual_increase / 100.0);
    }

    let interest_earned = balance - total_employee - total_employer;
    EpfProjection {
        maturity: balance.round() as i64,
        employee_share: total_employee.round() as i64,
        employer_share: total_employer.round() as i64,
        interest_earned: interest_earned.round() as i64,
    }
}
