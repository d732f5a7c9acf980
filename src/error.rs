//! Error taxonomy for the pricer.
//!
//! Two things can go wrong: the dividend-carry mode was given in a form the
//! crate does not recognise, or a numeric input lies outside the domain of the
//! closed-form formulas (logarithm, square root or division by zero).

use thiserror::Error;

/// Errors surfaced by parameter parsing and pricer construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// The dividend-carry marker is missing or not one of the accepted forms.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A parameter is non-finite or violates a strict positivity requirement.
    #[error("domain error: {parameter} = {value} ({reason})")]
    Domain {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl PricingError {
    /// Name of the offending parameter for domain errors.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            PricingError::Domain { parameter, .. } => Some(parameter),
            PricingError::Configuration(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
