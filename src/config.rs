//! TOML-backed parameter configuration.
//!
//! ```toml
//! strike = 4200.0
//! term_months = 3.0
//! spot = 4100.0
//! rate = 0.01
//! dividend_yield = 0.012
//! volatility = 0.15
//! dividend = "yes"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model_params::{DividendMode, OptionParams};

/// Parameter set as read from a configuration file.
///
/// Strike, term, spot and volatility are required. Rates default to zero and
/// the dividend mode defaults to `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    pub strike: f64,
    pub term_months: f64,
    pub spot: f64,

    #[serde(default = "default_rate")]
    pub rate: f64,

    #[serde(default = "default_rate")]
    pub dividend_yield: f64,

    pub volatility: f64,

    /// `"yes"`/`"no"` or a boolean
    #[serde(default)]
    pub dividend: DividendMode,
}

impl PricingConfig {
    /// Parameters of the sample report: K=4200, T=3 months, S0=4100,
    /// r=1%, q=1.2%, 15% volatility, with dividend carry.
    pub fn reference() -> Self {
        Self {
            strike: 4200.0,
            term_months: 3.0,
            spot: 4100.0,
            rate: 0.01,
            dividend_yield: 0.012,
            volatility: 0.15,
            dividend: DividendMode::WithDividend,
        }
    }

    /// Reference parameters with the dividend carry switched off.
    pub fn no_dividend() -> Self {
        Self {
            dividend: DividendMode::NoDividend,
            ..Self::reference()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse pricing configuration")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Convert into validated [`OptionParams`].
    pub fn into_params(self) -> crate::Result<OptionParams> {
        let params = OptionParams::from(self);
        params.validate()?;
        Ok(params)
    }
}

impl From<PricingConfig> for OptionParams {
    fn from(c: PricingConfig) -> Self {
        OptionParams::new(
            c.strike,
            c.term_months,
            c.spot,
            c.rate,
            c.dividend_yield,
            c.volatility,
            c.dividend,
        )
    }
}

fn default_rate() -> f64 {
    0.0
}
