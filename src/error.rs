use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostModelError {
    #[error("No price data at index {index}")]
    DataUnavailable { index: usize },

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid price series: {0}")]
    InvalidSeries(String),
}

pub type Result<T> = std::result::Result<T, CostModelError>;
