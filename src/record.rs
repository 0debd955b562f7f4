use serde::Deserialize;

/// One row of a recorded bid feed. Only the `price` column is consulted,
/// any other columns in the file are ignored. The field stays raw text
/// here: rows inside the warm-up window are dropped without ever being
/// parsed as a number.
#[derive(Debug, Deserialize)]
pub struct BidRecord {
    pub price: String,
}
