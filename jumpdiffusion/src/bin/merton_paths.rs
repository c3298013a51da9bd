//! `merton-paths`: simulate a jump-diffusion scenario and print it as CSV.
//!
//! Usage: `merton-paths [scenario.toml]`
//!
//! Without an argument the reference scenario runs. The ensemble goes to
//! stdout as `step,time,path_0,...`; summary statistics and the closed-form
//! comparison are logged to stderr (filter with `RUST_LOG`).

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use jumpdiffusion::core::{errors::Result, fail, DiscountFactor, Real};
use jumpdiffusion::instruments::{OptionType, Payoff, PlainVanillaPayoff};
use jumpdiffusion::math::Statistics;
use jumpdiffusion::methods::{mc_european_price, TimeGrid};
use jumpdiffusion::pricingengines::black_scholes_price;
use jumpdiffusion::{PathEnsemble, ScenarioConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => ScenarioConfig::default(),
    };
    config.validate()?;
    tracing::info!(
        spot = config.spot,
        maturity = config.maturity,
        rate = config.risk_free_rate,
        volatility = config.volatility,
        jump_intensity = config.jump_intensity,
        jump_mean = config.jump_mean,
        jump_vol = config.jump_vol,
        steps = config.steps,
        paths = config.num_paths,
        seeded = config.seed.is_some(),
        "simulating scenario"
    );

    let generator = config.path_generator()?;
    let ensemble = generator.simulate(&mut config.rng());

    let terminal: Statistics = ensemble.terminal_values().into_iter().collect();
    tracing::info!(
        mean = terminal.mean().unwrap_or(Real::NAN),
        std_dev = terminal.std_dev().unwrap_or(0.0),
        min = terminal.minimum().unwrap_or(Real::NAN),
        max = terminal.maximum().unwrap_or(Real::NAN),
        "terminal prices"
    );

    log_prices(&config, &ensemble)?;

    let stdout = io::stdout();
    if let Err(e) = write_csv(BufWriter::new(stdout.lock()), generator.time_grid(), &ensemble) {
        fail!("writing output: {e}");
    }
    Ok(())
}

fn log_prices(config: &ScenarioConfig, ensemble: &PathEnsemble) -> Result<()> {
    let (s, k, t, r, sigma) = (
        config.spot,
        config.strike,
        config.maturity,
        config.risk_free_rate,
        config.volatility,
    );
    let merton = config.merton_engine()?;
    let discount: DiscountFactor = (-r * t).exp();

    for option_type in OptionType::ALL {
        let payoff = PlainVanillaPayoff::new(option_type, k);
        let bs = black_scholes_price(option_type, s, k, t, r, sigma);
        let jump = merton.prices(option_type, &[k], t)[0];
        let (mc, mc_err) = mc_european_price(ensemble, |st| payoff.value(st), discount);
        tracing::info!(
            %payoff,
            black_scholes = bs,
            merton = jump,
            monte_carlo = mc,
            mc_error = mc_err,
            "option prices"
        );
    }
    Ok(())
}

/// Write the ensemble as `step,time,path_0,...`, one row per time step.
fn write_csv<W: Write>(
    mut out: W,
    grid: &TimeGrid,
    ensemble: &PathEnsemble,
) -> io::Result<()> {
    write!(out, "step,time")?;
    for j in 0..ensemble.num_paths() {
        write!(out, ",path_{j}")?;
    }
    writeln!(out)?;

    for i in 0..ensemble.steps() {
        write!(out, "{},{}", i + 1, grid.time(i))?;
        for value in ensemble.as_matrix().row(i).iter() {
            write!(out, ",{value}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}
