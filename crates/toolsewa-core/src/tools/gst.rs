//! GST calculator (exclusive and inclusive modes).

/// Whether the entered amount is before or after GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GstMode {
    /// Amount is the net value; GST is added on top.
    Exclusive,
    /// Amount already includes GST; the tax portion is backed out.
    Inclusive,
}

/// Input for the GST calculation.
#[derive(Debug, Clone, Copy)]
pub struct GstInput {
    pub amount: f64,
    /// Rate in percent (5, 12, 18, 28 are the common Indian rates)
    pub rate: f64,
    pub mode: GstMode,
}

/// Net / tax / total breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GstBreakdown {
    pub net: f64,
    pub gst: f64,
    pub total: f64,
}

impl GstBreakdown {
    /// Display string for the activity log.
    pub fn summary(&self) -> String {
        format!("GST: ₹{:.2}", self.gst)
    }
}

/// Computes the GST breakdown for either mode.
pub fn calculate(input: &GstInput) -> GstBreakdown {
    match input.mode {
        GstMode::Exclusive => {
            let gst = (input.amount * input.rate) / 100.0;
            GstBreakdown {
                net: input.amount,
                gst,
                total: input.amount + gst,
            }
        }
        GstMode::Inclusive => {
            let net = input.amount / (1.0 + input.rate / 100.0);
            GstBreakdown {
                net,
                gst: input.amount - net,
                total: input.amount,
            }
        }
    }
}
