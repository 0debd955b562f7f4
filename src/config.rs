/// Tunables for the price series pipeline. The defaults reproduce the
/// recording setup this tool was written against; tests override individual
/// fields instead of editing the pipeline.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Rows dropped from the start of the file before anything is parsed.
    /// The first bids of a recorded session come in anomalously low and
    /// would dominate the y axis as a spike. Empirical, not a law: 50 was
    /// observed to be enough for the feeds recorded so far.
    pub warmup_rows: usize,
    /// Recorded prices are fixed-point integers in 1/`price_scale` units of
    /// currency, so 10 000 means ten-thousandths.
    pub price_scale: i64,
    /// Output resolution in dots per inch.
    pub dpi: u32,
    /// Hand the saved image to the platform viewer after rendering.
    pub display: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            warmup_rows: 50,
            price_scale: 10_000,
            dpi: 300,
            display: true,
        }
    }
}

impl PlotConfig {
    /// Bitmap dimensions for the configured dpi over a 6.4in x 4.8in canvas.
    pub fn dimensions(&self) -> (u32, u32) {
        ((self.dpi as f64 * 6.4) as u32, (self.dpi as f64 * 4.8) as u32)
    }
}
