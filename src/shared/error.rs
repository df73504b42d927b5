use thiserror::Error;

use crate::shared::types::Category;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit { category: Category, unit: String },

    #[error("Exchange rate unavailable for {from} -> {to}: {reason}")]
    RateUnavailable {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ConvertError {
    fn from(err: reqwest::Error) -> Self {
        ConvertError::Network(err.to_string())
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
