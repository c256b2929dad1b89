//! Error types for the exchange-rate store

use crate::currency::Currency;
use crate::types::Rate;
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for exchange-rate operations
#[derive(Error, Debug)]
pub enum RateError {
    #[error("no exchange rate found for {0}")]
    RateNotFound(Currency),

    #[error("rate for {currency} on {date} is already {existing}, refusing to overwrite with {new}")]
    WriteConflict {
        currency: Currency,
        date: NaiveDate,
        existing: Rate,
        new: Rate,
    },

    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(Currency),

    #[error("unsupported base currency: {0}")]
    UnsupportedBaseCurrency(Currency),

    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("exchange rate must be a positive number, got: {0}")]
    InvalidRate(Rate),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for exchange-rate operations
pub type Result<T> = std::result::Result<T, RateError>;
