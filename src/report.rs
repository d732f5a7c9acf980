use std::fmt;

use crate::model_params::DividendMode;

/// Every output of the pricer for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Valuation {
    /// Dividend mode the figures were computed under
    pub dividend: DividendMode,
    pub call: f64,
    pub put: f64,
    /// One long call and one short put
    pub put_call_spread: f64,
    /// Forward struck at K, spot at expiry assumed equal to K
    pub forward_npv: f64,
    pub delta_call: f64,
    pub delta_put: f64,
    pub gamma: f64,
}

impl fmt::Display for Valuation {
    /// Fixed human-readable report. Prices and deltas are printed with six
    /// decimals, gamma with eight.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.dividend.has_dividend() {
            "BSM Option value with carry benefits"
        } else {
            "BSM Option value without carry benefits"
        };
        writeln!(f, "{}", title)?;
        writeln!(f, "Call = {:.6}", self.call)?;
        writeln!(f, "Put = {:.6}", self.put)?;
        writeln!(f)?;
        writeln!(f, "1 long call and 1 short put")?;
        writeln!(f, "Call - Put = {:.6}", self.put_call_spread)?;
        writeln!(f, "Forward = {:.6}", self.forward_npv)?;
        writeln!(f)?;
        writeln!(f, "Option Deltas for Call and Put")?;
        writeln!(f, "Delta Call = {:.6}", self.delta_call)?;
        writeln!(f, "Delta Put = {:.6}", self.delta_put)?;
        writeln!(f)?;
        write!(f, "Gamma = {:.8}", self.gamma)
    }
}
