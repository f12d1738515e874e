use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::RecordResult;
use crate::values::{Amount, checked_amount, Minute, OrderId, Price, Volume};

/// One committed (accepted) order event in canonical shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedOrderRecord {
    pub minute: Minute,
    pub order_id: OrderId,
    pub volume: Volume,
    pub price: Price,
    /// price * volume
    pub amount: Amount,
}

impl NormalizedOrderRecord {
    /// Build a record from an order timestamp, deriving minute and amount
    pub fn new(
        time: NaiveDateTime,
        order_id: u64,
        volume: Volume,
        price: Price,
    ) -> RecordResult<Self> {
        let amount = checked_amount(price, volume)?;

        Ok(Self {
            minute: Minute::floor(time),
            order_id: OrderId(order_id),
            volume,
            price,
            amount,
        })
    }
}
