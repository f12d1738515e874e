//! ACT family: buy/sell amount imbalance by order size
//!
//! For a set of buckets K:
//!
//! ```text
//! ratio(K) = (buy(K) - sell(K)) / (buy(K) + sell(K))
//! ```
//!
//! with 0 when no flow exists in K. `ACT` is `ratio({L, M})`; small and
//! extra-large flow stay out of the composite.

use log::debug;
use rust_decimal::Decimal;
use tickfactor_core::{ActFactors, NormalizedTradeRecord, Side, SizeBucket};

use crate::aggregation::{SidedBucketTotals, safe_div, trade_bucket_totals};
use crate::classifier::BucketClassifier;

/// Buckets contributing to the headline ACT factor
pub const ACT_COMPOSITE: [SizeBucket; 2] = [SizeBucket::L, SizeBucket::M];

/// Imbalance ratio over a set of buckets, in [-1, 1]
pub fn imbalance(totals: &SidedBucketTotals, buckets: &[SizeBucket]) -> Decimal {
    let buy = totals.sum(buckets, Side::Buy);
    let sell = totals.sum(buckets, Side::Sell);
    safe_div(buy - sell, buy + sell)
}

/// ACT family from precomputed daily totals
pub fn act_from_totals(totals: &SidedBucketTotals) -> ActFactors {
    ActFactors {
        act: imbalance(totals, &ACT_COMPOSITE),
        l_act: imbalance(totals, &[SizeBucket::L]),
        m_act: imbalance(totals, &[SizeBucket::M]),
        s_act: imbalance(totals, &[SizeBucket::S]),
        x_act: imbalance(totals, &[SizeBucket::X]),
    }
}

/// ACT family for one symbol-day of trade records
pub fn calc_act_family(
    trades: &[NormalizedTradeRecord],
    classifier: &BucketClassifier,
) -> ActFactors {
    let totals = trade_bucket_totals(trades, classifier);

    for bucket in SizeBucket::ALL {
        debug!(
            "ACT bucket {}: buy={} sell={}",
            bucket,
            totals.get(bucket, Side::Buy),
            totals.get(bucket, Side::Sell)
        );
    }

    act_from_totals(&totals)
}
