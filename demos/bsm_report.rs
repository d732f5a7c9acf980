// demos/bsm_report.rs

//! Prints the Black-Scholes-Merton report for one hardcoded option:
//! K=4200, T=3 months, S0=4100, r=1%, q=1.2%, 15% volatility, with dividend carry.
//!
//! Set `RUST_LOG=bsm_lib=debug` to see the pricer's trace output.

use anyhow::{Context, Result};
use bsm_lib::{DividendMode, OptionParams, Pricer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let params = OptionParams::new(
        4200.0, // strike price
        3.0,    // time to maturity in months
        4100.0, // spot price
        0.01,   // interest rate
        0.012,  // dividend yield
        0.15,   // volatility
        DividendMode::WithDividend,
    );

    let pricer = Pricer::new(params).context("invalid option parameters")?;
    println!("{}", pricer.valuation());

    Ok(())
}
