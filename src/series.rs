use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::record::BidRecord;

use tracing::debug;

/// Turns raw bid records into the sequence that gets plotted: drop the
/// warm-up window, drop sentinel-zero bids, rescale the rest to currency
/// units. Order is preserved, it becomes the x axis.
pub fn build_series<I>(records: I, config: &PlotConfig) -> Result<Vec<f64>, PlotError>
where
    I: Iterator<Item = Result<BidRecord, csv::Error>>,
{
    let mut prices = Vec::new();
    let mut skipped = 0;
    let mut zero_bids = 0;

    for (row, record) in records.enumerate() {
        let record = record?;

        if skipped < config.warmup_rows {
            skipped += 1;
            continue;
        }

        let sample: i64 = record.price.parse().map_err(|err| {
            PlotError::Format(format!(
                "data row {}: price {:?} is not an integer: {}",
                row + 1,
                record.price,
                err
            ))
        })?;

        // Zero marks "no active bid", not an actual price of zero.
        if sample == 0 {
            zero_bids += 1;
            continue;
        }

        prices.push(sample as f64 / config.price_scale as f64);
    }

    debug!(skipped, zero_bids, kept = prices.len(), "built price series");
    Ok(prices)
}
