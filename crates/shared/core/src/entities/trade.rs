use chrono::NaiveDateTime;
use serde::Serialize;

use super::Side;
use crate::error::RecordResult;
use crate::values::{Amount, checked_amount, Hhmm, Minute, OrderId, Price, Volume};

/// One matched trade print, already mapped to the canonical shape
///
/// Both counterparty order ids are kept; which one is the "true" order of
/// the print depends on `side`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTradeRecord {
    pub minute: Minute,
    pub hhmm: Hhmm,
    pub side: Side,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub volume: Volume,
    pub price: Price,
    /// price * volume
    pub amount: Amount,
}

impl NormalizedTradeRecord {
    /// Build a record from a trade timestamp, deriving minute, hhmm and amount
    pub fn new(
        time: NaiveDateTime,
        side: Side,
        buy_order_id: u64,
        sell_order_id: u64,
        volume: Volume,
        price: Price,
    ) -> RecordResult<Self> {
        let amount = checked_amount(price, volume)?;

        Ok(Self {
            minute: Minute::floor(time),
            hhmm: Hhmm::from_time(time),
            side,
            buy_order_id: OrderId(buy_order_id),
            sell_order_id: OrderId(sell_order_id),
            volume,
            price,
            amount,
        })
    }

    /// The order that initiated this print: buy id for B, sell id for S
    pub fn true_order_id(&self) -> OrderId {
        match self.side {
            Side::Buy => self.buy_order_id,
            Side::Sell => self.sell_order_id,
        }
    }
}
