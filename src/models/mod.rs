pub mod bs;

/// Standard normal distribution helpers shared by the pricing formulas
pub mod utils {
    use statrs::consts::SQRT_2PI;
    use std::f64::consts::SQRT_2;

    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Written in terms of `erfc` so that the lower tail keeps full relative
    /// precision instead of cancelling against 1.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }

    /// Standard normal probability density function φ(x).
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / SQRT_2PI
    }

}
