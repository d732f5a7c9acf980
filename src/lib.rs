//! # bsm-lib: Closed-Form Black-Scholes-Merton Pricing
//!
//! `bsm-lib` values a single European equity option with the Black-Scholes-Merton
//! formula and reports its first- and second-order spot sensitivities. The
//! dividend yield either enters the cost of carry or is ignored, depending on
//! the [`DividendMode`].
//!
//! ## Outputs
//!
//! - **Call and put prices**: no flooring at zero
//! - **Forward NPV**: forward struck at K, spot at expiry assumed equal to K
//! - **Deltas**: call and put
//! - **Gamma**
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{DividendMode, OptionParams, Pricer};
//!
//! let params = OptionParams::new(4200.0, 3.0, 4100.0, 0.01, 0.012, 0.15, DividendMode::WithDividend);
//! let pricer = Pricer::new(params)?;
//!
//! let (call, put) = pricer.call_put_prices();
//! assert!((call - put - pricer.equity_forward_npv()).abs() < 1e-9);
//!
//! println!("{}", pricer.valuation());
//! # Ok::<(), bsm_lib::PricingError>(())
//! ```
//!
//! Term to maturity is given in **months** and converted to years internally.

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod model_params;
pub mod models;
pub mod report;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};
pub use model_params::{DividendMode, OptionParams};
pub use models::bs::{CarryTerms, Pricer, D1D2};
pub use report::Valuation;

#[cfg(feature = "serde")]
pub use config::PricingConfig;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Ready-made parameter sets.
#[cfg(feature = "serde")]
pub mod default_configs {
    use crate::config::PricingConfig;

    /// The sample report's parameters, with dividend carry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_lib::default_configs;
    ///
    /// let params = default_configs::reference().into_params().unwrap();
    /// assert_eq!(params.years(), 0.25);
    /// ```
    pub fn reference() -> PricingConfig {
        PricingConfig::reference()
    }

    /// Same as [`reference()`] with the dividend carry switched off.
    pub fn no_dividend() -> PricingConfig {
        PricingConfig::no_dividend()
    }
}

/// Validate `params` and evaluate every output in one call.
///
/// # Errors
///
/// [`PricingError::Domain`] if strike, term, spot or volatility is not strictly
/// positive, or any field is not finite. Nothing is computed in that case.
///
/// # Example
///
/// ```rust
/// use bsm_lib::{price_european, DividendMode, OptionParams};
///
/// let params = OptionParams::new(100.0, 12.0, 100.0, 0.05, 0.02, 0.2, DividendMode::WithDividend);
/// let valuation = price_european(params)?;
/// assert!(valuation.call > valuation.put);
/// # Ok::<(), bsm_lib::PricingError>(())
/// ```
pub fn price_european(params: OptionParams) -> Result<Valuation> {
    Ok(Pricer::new(params)?.valuation())
}
