// demos/toml_report.rs

//! Prints the Black-Scholes-Merton report for parameters read from a TOML file.
//!
//! ```text
//! cargo run --example toml_report -- params.toml
//! ```
//!
//! Without an argument the reference parameter set is used.

use anyhow::{bail, Result};
use bsm_lib::{default_configs, price_european, PricingConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let config = match (args.next(), args.next()) {
        (None, _) => {
            info!("no parameter file given, using reference parameters");
            default_configs::reference()
        }
        (Some(path), None) => {
            info!(%path, "loading parameters");
            PricingConfig::from_path(&path)?
        }
        (Some(_), Some(_)) => bail!("usage: toml_report [PARAMS.toml]"),
    };

    let valuation = price_european(config.into_params()?)?;
    println!("{}", valuation);

    Ok(())
}
