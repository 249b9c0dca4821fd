use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid scale: domain=({domain_start}, {domain_end}), range=({range_start}, {range_end})")]
    InvalidScale {
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
