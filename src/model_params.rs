//! Input data model: the seven contract and market parameters of a single
//! European option, plus the dividend-carry mode.
//!
//! The carry mode used to be a free-form "yes"/"no" marker; here it is a
//! two-variant enum and every textual form is parsed through [`DividendMode::from_str`],
//! so an unrecognised marker becomes a [`PricingError::Configuration`] instead of
//! leaving the carry terms undefined.

use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};

/// Months per year used to convert the term to maturity.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Whether the underlying pays a continuous dividend yield that enters the carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DividendMarker"))]
pub enum DividendMode {
    /// Carry rate is `q`, spot is discounted by `exp(-q*T)`.
    WithDividend,
    /// No carry benefit: carry rate 0, discount factor 1.
    #[default]
    NoDividend,
}

impl DividendMode {
    pub fn from_flag(has_dividend: bool) -> Self {
        if has_dividend {
            DividendMode::WithDividend
        } else {
            DividendMode::NoDividend
        }
    }

    pub fn has_dividend(self) -> bool {
        matches!(self, DividendMode::WithDividend)
    }

    /// Canonical marker used in configuration files and reports.
    pub fn marker(self) -> &'static str {
        match self {
            DividendMode::WithDividend => "yes",
            DividendMode::NoDividend => "no",
        }
    }
}

impl fmt::Display for DividendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

impl FromStr for DividendMode {
    type Err = PricingError;

    /// Accepts `yes`/`no` and `true`/`false`, case-insensitive, surrounding
    /// whitespace ignored. Anything else is a configuration error.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" => Ok(DividendMode::WithDividend),
            "no" | "false" => Ok(DividendMode::NoDividend),
            "" => Err(PricingError::Configuration(
                "dividend mode is unspecified (expected \"yes\" or \"no\")".to_string(),
            )),
            other => Err(PricingError::Configuration(format!(
                "unrecognized dividend mode {:?} (expected \"yes\" or \"no\")",
                other
            ))),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DividendMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.marker())
    }
}

/// Raw form of the dividend marker as it appears in a config file.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DividendMarker {
    Flag(bool),
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<DividendMarker> for DividendMode {
    type Error = PricingError;

    fn try_from(marker: DividendMarker) -> Result<Self> {
        match marker {
            DividendMarker::Flag(flag) => Ok(DividendMode::from_flag(flag)),
            DividendMarker::Text(text) => text.parse(),
        }
    }
}

/// Contract and market parameters for one European option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParams {
    /// Strike price K
    pub strike: f64,
    /// Term to maturity in months
    pub term_months: f64,
    /// Spot price S0
    pub spot: f64,
    /// Continuously compounded risk-free rate r
    pub rate: f64,
    /// Continuous dividend yield q
    pub dividend_yield: f64,
    /// Annualised volatility
    pub volatility: f64,
    /// Dividend-carry mode
    pub dividend: DividendMode,
}

impl OptionParams {
    pub fn new(
        strike: f64,
        term_months: f64,
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        dividend: DividendMode,
    ) -> Self {
        Self {
            strike,
            term_months,
            spot,
            rate,
            dividend_yield,
            volatility,
            dividend,
        }
    }

    /// Term to maturity in years.
    pub fn years(&self) -> f64 {
        self.term_months / MONTHS_PER_YEAR
    }

    /// Check every field against the domain of the closed-form formulas.
    ///
    /// Fields are checked in declaration order and the first violation is
    /// returned, so the error always names a single parameter.
    pub fn validate(&self) -> Result<()> {
        positive("strike", self.strike)?;
        positive("term_months", self.term_months)?;
        positive("spot", self.spot)?;
        finite("rate", self.rate)?;
        finite("dividend_yield", self.dividend_yield)?;
        positive("volatility", self.volatility)?;
        Ok(())
    }
}

fn finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::Domain {
            parameter,
            value,
            reason: "must be a finite number",
        })
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<()> {
    finite(parameter, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::Domain {
            parameter,
            value,
            reason: "must be strictly positive",
        })
    }
}
