use std::fmt;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Traded or ordered quantity
pub type Volume = Decimal;

/// Monetary amount (price * volume)
pub type Amount = Decimal;

/// Largest volume or amount a single record may carry (1e18).
///
/// Daily sums stay below `Decimal::MAX` for any day shorter than ~7.9e10 rows.
pub const MAX_RECORD_VALUE: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// `price * volume`, rejecting values that would overflow a daily sum
pub fn checked_amount(price: Price, volume: Volume) -> RecordResult<Amount> {
    if price < Decimal::ZERO || volume < Decimal::ZERO {
        return Err(RecordError::NegativeAmount { price, volume });
    }
    match price.checked_mul(volume) {
        Some(amount) if amount <= MAX_RECORD_VALUE && volume <= MAX_RECORD_VALUE => Ok(amount),
        _ => Err(RecordError::AmountOverflow { price, volume }),
    }
}

/// Exchange-assigned sequence number of one order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Wall-clock timestamp floored to the start of its minute
///
/// All aggregations group on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Minute(NaiveDateTime);

impl Minute {
    /// Floor a timestamp to its minute
    pub fn floor(time: NaiveDateTime) -> Self {
        let floored = time
            - TimeDelta::seconds(i64::from(time.second()))
            - TimeDelta::nanoseconds(i64::from(time.nanosecond()));
        Self(floored)
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Intraday minute code of this minute
    pub fn hhmm(&self) -> Hhmm {
        Hhmm::from_time(self.0)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// Intraday minute code in HHMM form (e.g. 925 for 09:25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Hhmm(u16);

impl Hhmm {
    /// Create from a raw HHMM code, rejecting impossible clock values
    pub fn new(code: u16) -> RecordResult<Self> {
        if code / 100 < 24 && code % 100 < 60 {
            Ok(Self(code))
        } else {
            Err(RecordError::InvalidHhmm(code))
        }
    }

    /// Create from a literal code; invalid codes fail at compile time in const context
    pub const fn from_const(code: u16) -> Self {
        assert!(code / 100 < 24 && code % 100 < 60, "invalid HHMM code");
        Self(code)
    }

    /// Create from hour and minute
    pub fn from_hm(hour: u16, minute: u16) -> RecordResult<Self> {
        if minute >= 60 {
            return Err(RecordError::InvalidHhmm(hour.saturating_mul(100).saturating_add(minute)));
        }
        Self::new(hour.saturating_mul(100).saturating_add(minute))
    }

    /// Extract the minute code of a timestamp
    pub fn from_time(time: NaiveDateTime) -> Self {
        // hour < 24 and minute < 60 always hold for a NaiveDateTime
        Self((time.hour() * 100 + time.minute()) as u16)
    }

    pub fn code(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Hhmm {
    type Error = RecordError;

    fn try_from(code: u16) -> RecordResult<Self> {
        Self::new(code)
    }
}

impl From<Hhmm> for u16 {
    fn from(hhmm: Hhmm) -> Self {
        hhmm.0
    }
}

impl fmt::Display for Hhmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 100, self.0 % 100)
    }
}
