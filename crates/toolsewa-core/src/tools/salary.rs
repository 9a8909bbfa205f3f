//! In-hand salary calculator (Indian new-regime FY 2024-25 approximation).

/// Input for the salary calculation.
#[derive(Debug, Clone, Copy)]
pub struct SalaryInput {
    /// Annual cost-to-company in rupees
    pub annual_ctc: f64,
}

/// In-hand salary breakdown, rounded to whole rupees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBreakdown {
    pub in_hand_monthly: i64,
    pub tax_yearly: i64,
    pub pf_yearly: i64,
}

impl SalaryBreakdown {
    /// Display string for the activity log.
    pub fn summary(&self) -> String {
        format!("In-Hand: ₹{}/mo", self.in_hand_monthly)
    }
}

const STANDARD_DEDUCTION: f64 = 50_000.0;
const PF_CAP: f64 = 21_600.0;
const REBATE_CEILING: f64 = 700_000.0;
const CESS_RATE: f64 = 0.04;

/// Computes the new-regime in-hand breakdown.
///
/// Approximations carried over from the product definition: PF is 12% of an
/// assumed 40% basic, capped; taxable income below the rebate ceiling pays
/// no tax; professional tax is not deducted.
pub fn calculate(input: &SalaryInput) -> SalaryBreakdown {
    let ctc = input.annual_ctc.max(0.0);
    let pf = (ctc * 0.4 * 0.12).min(PF_CAP);
    let taxable = (ctc - pf - STANDARD_DEDUCTION).max(0.0);

    let tax = if taxable <= REBATE_CEILING {
        0.0
    } else {
        slab_tax(taxable)
    };
    let total_tax = tax + tax * CESS_RATE;

    let in_hand_yearly = ctc - pf - total_tax;
    SalaryBreakdown {
        in_hand_monthly: (in_hand_yearly / 12.0).round() as i64,
        tax_yearly: total_tax.round() as i64,
        pf_yearly: pf.round() as i64,
    }
}

/// FY 2024-25 new-regime slabs, applied above the rebate ceiling.
fn slab_tax(taxable: f64) -> f64 {
    if taxable <= 900_000.0 {
        15_000.0 + (taxable - 600_000.0) * 0.10
    } else if taxable <= 1_200_000.0 {
        45_000.0 + (taxable - 900_000.0) * 0.15
    } else if taxable <= 1_500_000.0 {
        90_000.0 + (taxable - 1_200_000.0) * 0.20
    } else {
        150_000.0 + (taxable - 1_500_000.0) * 0.30
    }
}
