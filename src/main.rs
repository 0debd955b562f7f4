use bidplot::config::PlotConfig;
use bidplot::error::PlotError;
use bidplot::plot_prices;

use anyhow::Context;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("bidplot=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let (input, output) = match parse_args(&args) {
        Ok(paths) => paths,
        Err(err) => {
            println!("{err}");
            process::exit(1);
        }
    };

    plot_prices(&input, &output, &PlotConfig::default())
        .with_context(|| format!("failed to plot prices from '{input}'"))?;

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(String, String), PlotError> {
    match args {
        [_, input, output] => Ok((input.clone(), output.clone())),
        _ => Err(PlotError::Usage),
    }
}
