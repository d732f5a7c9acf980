// Closed-form Black-Scholes-Merton valuation of a single European option,
// with or without a continuous dividend yield entering the carry.

use tracing::{debug, warn};

use crate::error::Result;
use crate::model_params::{DividendMode, OptionParams};
use crate::models::utils::{norm_cdf, norm_pdf};
use crate::report::Valuation;

/// Carry adjustment derived from the dividend mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarryTerms {
    /// Rate subtracted from `r` in the drift of d1
    pub carry_rate: f64,
    /// Factor applied to spot, `exp(-q*T)` or 1
    pub discount_factor: f64,
}

/// Standardised distances d1 and d2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    pub d1: f64,
    pub d2: f64,
}

/// Pricer for one European option.
///
/// A `Pricer` can only be built from parameters that pass
/// [`OptionParams::validate`], so every operation below is total. Nothing is
/// cached: each operation recomputes the carry terms and d1/d2 it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricer {
    params: OptionParams,
}

impl Pricer {
    /// Validate `params` and wrap them. Fails with a domain error naming the
    /// first non-positive or non-finite parameter.
    pub fn new(params: OptionParams) -> Result<Self> {
        params.validate()?;
        debug!(
            strike = params.strike,
            term_months = params.term_months,
            spot = params.spot,
            rate = params.rate,
            dividend_yield = params.dividend_yield,
            volatility = params.volatility,
            dividend = %params.dividend,
            "pricer constructed"
        );
        Ok(Self { params })
    }

    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    /// Carry rate and spot discount factor for the current dividend mode.
    pub fn carry_terms(&self) -> CarryTerms {
        let p = &self.params;
        match p.dividend {
            DividendMode::WithDividend => CarryTerms {
                carry_rate: p.dividend_yield,
                discount_factor: (-p.dividend_yield * p.years()).exp(),
            },
            DividendMode::NoDividend => CarryTerms {
                carry_rate: 0.0,
                discount_factor: 1.0,
            },
        }
    }

    pub fn d1_d2(&self) -> D1D2 {
        let p = &self.params;
        let t = p.years();
        let carry = self.carry_terms();

        let a = (p.spot / p.strike).ln();
        let b = (p.rate - carry.carry_rate + p.volatility.powi(2) / 2.0) * t;
        let c = p.volatility * t.sqrt();

        let d1 = (a + b) / c;
        D1D2 { d1, d2: d1 - c }
    }

    /// European call and put prices. No flooring at zero is applied.
    pub fn call_put_prices(&self) -> (f64, f64) {
        let p = &self.params;
        let t = p.years();
        let carry = self.carry_terms();
        let D1D2 { d1, d2 } = self.d1_d2();

        let discounted_spot = p.spot * carry.discount_factor;
        let discounted_strike = p.strike * (-p.rate * t).exp();

        let call = discounted_spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
        let put = discounted_strike * norm_cdf(-d2) - discounted_spot * norm_cdf(-d1);

        if call < 0.0 || put < 0.0 {
            warn!(call, put, "negative option price for pathological inputs");
        }
        (call, put)
    }

    /// Net present value of a forward struck at K, assuming the spot at expiry
    /// equals the strike.
    pub fn equity_forward_npv(&self) -> f64 {
        let p = &self.params;
        let t = p.years();

        let a = match p.dividend {
            DividendMode::WithDividend => p.spot / (p.dividend_yield * t).exp(),
            DividendMode::NoDividend => p.spot,
        };
        let b = p.strike / (p.rate * t).exp();

        a - b
    }

    /// Call and put deltas.
    ///
    /// The dividend yield enters through `exp(-q*T)` even in
    /// [`DividendMode::NoDividend`], unlike the prices and the forward. This
    /// keeps the reference figures unchanged; whether the asymmetry is
    /// intended is an open question.
    pub fn deltas(&self) -> (f64, f64) {
        let p = &self.params;
        let D1D2 { d1, .. } = self.d1_d2();
        let yield_factor = (-p.dividend_yield * p.years()).exp();

        (yield_factor * norm_cdf(d1), -yield_factor * norm_cdf(-d1))
    }

    pub fn gamma(&self) -> f64 {
        let p = &self.params;
        let t = p.years();
        let D1D2 { d1, .. } = self.d1_d2();

        let a = (-p.dividend_yield * t).exp();
        let b = p.spot * p.volatility * t.sqrt();
        (a / b) * norm_pdf(d1)
    }

    /// Value of one long call and one short put.
    pub fn put_call_spread(&self) -> f64 {
        let (call, put) = self.call_put_prices();
        call - put
    }

    /// Evaluate every output and bundle them for reporting.
    pub fn valuation(&self) -> Valuation {
        let (call, put) = self.call_put_prices();
        let (delta_call, delta_put) = self.deltas();
        let valuation = Valuation {
            dividend: self.params.dividend,
            call,
            put,
            put_call_spread: call - put,
            forward_npv: self.equity_forward_npv(),
            delta_call,
            delta_put,
            gamma: self.gamma(),
        };
        debug!(?valuation, "valuation complete");
        valuation
    }
}
