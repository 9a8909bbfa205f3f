//! Gratuity calculator.

use super::format_inr;

/// Input for the gratuity estimate.
#[derive(Debug, Clone, Copy)]
pub struct GratuityInput {
    /// Last drawn basic salary plus dearness allowance, monthly
    pub monthly_salary: f64,
    /// Completed years of continuous service
    pub years_of_service: f64,
}

/// Gratuity estimate, rounded to whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GratuityResult {
    pub amount: i64,
}

impl GratuityResult {
    /// Display string for the activity log.
    pub fn summary(&self) -> String {
        format!("Gratuity: ₹{}", format_inr(self.amount))
    }
}

/// Statutory formula: `15 x salary x tenure / 26`.
///
/// Eligibility (5 completed years) is a product rule enforced by the
/// screen, not by the formula.
pub fn calculate(input: &GratuityInput) -> GratuityResult {
    let amount = (15.0 * input.monthly_salary * input.years_of_service) / 26.0;
    GratuityResult {
        amount: amount.round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statutory_formula() {
        let result = calculate(&GratuityInput {
            monthly_salary: 50_000.0,
            years_of_service: 5.0,
        });
        // 15 * 50,000 * 5 / 26 = 1,44,230.77
        assert_eq!(result.amount, 144_231);
        assert_eq!(result.summary(), "Gratuity: ₹1,44,231");
    }

    #[test]
    fn test_zero_service() {
        let result = calculate(&GratuityInput {
            monthly_salary: 50_000.0,
            years_of_service: 0.0,
        });
        assert_eq!(result.amount, 0);
    }
}
