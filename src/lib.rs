pub mod chart;
pub mod config;
pub mod error;
pub mod record;
pub mod series;

use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::record::BidRecord;
use csv::ReaderBuilder;
use std::fs::File;
use tracing::info;

pub fn stream_bids(
    path: &str,
) -> Result<impl Iterator<Item = Result<BidRecord, csv::Error>>, PlotError> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    // Check the header up front so a file without a price column fails even
    // when it carries no data rows.
    let headers = rdr.headers()?;
    if !headers.iter().any(|name| name == "price") {
        return Err(PlotError::Format(
            "input has no \"price\" column".to_string(),
        ));
    }

    Ok(rdr.into_deserialize::<BidRecord>())
}

pub fn plot_prices(
    input_path: &str,
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), PlotError> {
    let records = stream_bids(input_path)?;
    let prices = series::build_series(records, config)?;
    info!("{}: kept {} bids for plotting", input_path, prices.len());

    chart::render_chart(&prices, output_path, config)?;
    info!("saved plot to {}", output_path);

    if config.display {
        chart::open_viewer(output_path);
    }

    Ok(())
}
