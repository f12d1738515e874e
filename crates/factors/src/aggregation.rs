//! Aggregation Engine
//!
//! Recovers the economic size of each order's activity within a minute
//! before bucketing. One large order that prints against many
//! counterparties shows up as many small trade rows; bucketing the rows
//! individually would file it under S. Grouping on (minute, order id)
//! first puts it in the bucket of its summed amount.
//!
//! ## Modes
//!
//! - **Trade mode** (side-aware): B rows group on `buy_order_id`, S rows on
//!   `sell_order_id`. Daily totals are kept per (bucket, side).
//! - **Order mode** (side-agnostic): order events group on `order_id`.
//!   Each committed order is expected once; duplicates are summed.
//!   Daily totals are kept per bucket.
//!
//! Sums use plain `+=`: record constructors cap each amount at
//! `MAX_RECORD_VALUE`, far below the point where a day's total could
//! overflow `Decimal`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tickfactor_core::{
    Amount, Minute, NormalizedOrderRecord, NormalizedTradeRecord, OrderId, Side, SizeBucket,
};

use crate::classifier::BucketClassifier;

/// Summed amount of one order within one minute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMinuteAggregate {
    pub minute: Minute,
    pub order_id: OrderId,
    /// Present in trade mode only
    pub side: Option<Side>,
    pub total_amount: Amount,
}

/// Group trade rows by (side, minute, true order id)
///
/// Output is ordered by side, then minute, then order id.
pub fn aggregate_trades(trades: &[NormalizedTradeRecord]) -> Vec<OrderMinuteAggregate> {
    let mut groups: BTreeMap<(Side, Minute, OrderId), Amount> = BTreeMap::new();
    for trade in trades {
        *groups
            .entry((trade.side, trade.minute, trade.true_order_id()))
            .or_default() += trade.amount;
    }

    groups
        .into_iter()
        .map(|((side, minute, order_id), total_amount)| OrderMinuteAggregate {
            minute,
            order_id,
            side: Some(side),
            total_amount,
        })
        .collect()
}

/// Group order events by (minute, order id)
pub fn aggregate_orders(orders: &[NormalizedOrderRecord]) -> Vec<OrderMinuteAggregate> {
    let mut groups: BTreeMap<(Minute, OrderId), Amount> = BTreeMap::new();
    for order in orders {
        *groups.entry((order.minute, order.order_id)).or_default() += order.amount;
    }

    groups
        .into_iter()
        .map(|((minute, order_id), total_amount)| OrderMinuteAggregate {
            minute,
            order_id,
            side: None,
            total_amount,
        })
        .collect()
}

/// Daily amount per (bucket, side); absent combinations read as 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidedBucketTotals {
    totals: [[Amount; 2]; 4],
}

impl SidedBucketTotals {
    pub fn add(&mut self, bucket: SizeBucket, side: Side, amount: Amount) {
        self.totals[bucket.index()][side.index()] += amount;
    }

    #[inline]
    pub fn get(&self, bucket: SizeBucket, side: Side) -> Amount {
        self.totals[bucket.index()][side.index()]
    }

    /// Sum for one side across a set of buckets
    pub fn sum(&self, buckets: &[SizeBucket], side: Side) -> Amount {
        buckets.iter().map(|b| self.get(*b, side)).sum()
    }

    /// Sum for one side across all buckets
    pub fn side_total(&self, side: Side) -> Amount {
        self.sum(&SizeBucket::ALL, side)
    }
}

/// Daily amount per bucket; absent buckets read as 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketTotals {
    totals: [Amount; 4],
}

impl BucketTotals {
    pub fn add(&mut self, bucket: SizeBucket, amount: Amount) {
        self.totals[bucket.index()] += amount;
    }

    #[inline]
    pub fn get(&self, bucket: SizeBucket) -> Amount {
        self.totals[bucket.index()]
    }

    /// Sum across all buckets
    pub fn total(&self) -> Amount {
        self.totals.iter().copied().sum()
    }
}

/// Trade mode: aggregate, classify each order-minute, accumulate per (bucket, side)
pub fn trade_bucket_totals(
    trades: &[NormalizedTradeRecord],
    classifier: &BucketClassifier,
) -> SidedBucketTotals {
    let mut daily = SidedBucketTotals::default();
    for agg in aggregate_trades(trades) {
        // aggregate_trades always tags a side
        let Some(side) = agg.side else { continue };
        daily.add(classifier.classify(agg.total_amount), side, agg.total_amount);
    }
    daily
}

/// Order mode: aggregate, classify each order-minute, accumulate per bucket
pub fn order_bucket_totals(
    orders: &[NormalizedOrderRecord],
    classifier: &BucketClassifier,
) -> BucketTotals {
    let mut daily = BucketTotals::default();
    for agg in aggregate_orders(orders) {
        daily.add(classifier.classify(agg.total_amount), agg.total_amount);
    }
    daily
}

/// Division that reads a zero denominator as "no signal"
#[inline]
pub(crate) fn safe_div(num: Decimal, den: Decimal) -> Decimal {
    if den.is_zero() {
        Decimal::ZERO
    } else {
        num / den
    }
}
