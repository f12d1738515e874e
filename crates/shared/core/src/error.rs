use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while constructing normalized records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Negative amount: price={price}, volume={volume}")]
    NegativeAmount { price: Decimal, volume: Decimal },

    #[error("Amount out of range: price={price}, volume={volume}")]
    AmountOverflow { price: Decimal, volume: Decimal },

    #[error("Invalid intraday minute code: {0}")]
    InvalidHhmm(u16),

    #[error("Invalid side flag: {0}")]
    InvalidSide(String),
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;
