use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Usage: bidplot <prices csv> <output image>")]
    Usage,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input: {0}")]
    Format(String),

    #[error("failed to render chart: {0}")]
    Render(String),
}

impl From<csv::Error> for PlotError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(err) => PlotError::Io(err),
                _ => unreachable!(),
            }
        } else {
            PlotError::Format(err.to_string())
        }
    }
}
