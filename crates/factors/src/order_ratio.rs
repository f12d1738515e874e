//! Order-ratio family: distribution of committed order amount by size
//!
//! Each ratio is `total(bucket) / total(all buckets)`, 0 on an empty day.
//! `XLS_ORDER_RATIO` measures the X bucket alone.

use log::debug;
use tickfactor_core::{NormalizedOrderRecord, OrderRatioFactors, SizeBucket};

use crate::aggregation::{BucketTotals, order_bucket_totals, safe_div};
use crate::classifier::BucketClassifier;

/// Order-ratio family from precomputed daily totals
pub fn order_ratio_from_totals(totals: &BucketTotals) -> OrderRatioFactors {
    let total = totals.total();
    OrderRatioFactors {
        xls_order_ratio: safe_div(totals.get(SizeBucket::X), total),
        l_order_ratio: safe_div(totals.get(SizeBucket::L), total),
        m_order_ratio: safe_div(totals.get(SizeBucket::M), total),
        s_order_ratio: safe_div(totals.get(SizeBucket::S), total),
    }
}

/// Order-ratio family for one symbol-day of order records
pub fn calc_order_ratio_family(
    orders: &[NormalizedOrderRecord],
    classifier: &BucketClassifier,
) -> OrderRatioFactors {
    let totals = order_bucket_totals(orders, classifier);
    debug!(
        "Order buckets: S={} M={} L={} X={} total={}",
        totals.get(SizeBucket::S),
        totals.get(SizeBucket::M),
        totals.get(SizeBucket::L),
        totals.get(SizeBucket::X),
        totals.total()
    );
    order_ratio_from_totals(&totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn order(minute: u32, id: u64, amount: Decimal) -> NormalizedOrderRecord {
        let time = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(10, minute, 0)
            .unwrap();
        NormalizedOrderRecord::new(time, id, amount, dec!(1)).unwrap()
    }

    #[test]
    fn test_ratios_by_bucket() {
        let orders = vec![
            order(0, 1, dec!(10_000)),    // S
            order(0, 2, dec!(90_000)),    // M
            order(1, 3, dec!(400_000)),   // L
            order(2, 4, dec!(1_500_000)), // X
        ];

        let ratios = calc_order_ratio_family(&orders, &BucketClassifier::default());
        assert_eq!(ratios.s_order_ratio, dec!(0.005));
        assert_eq!(ratios.m_order_ratio, dec!(0.045));
        assert_eq!(ratios.l_order_ratio, dec!(0.2));
        assert_eq!(ratios.xls_order_ratio, dec!(0.75));
        assert_eq!(ratios.sum(), dec!(1));
    }

    #[test]
    fn test_xls_is_extra_large_only() {
        let orders = vec![order(0, 1, dec!(500_000)), order(0, 2, dec!(10_000))];
        let ratios = calc_order_ratio_family(&orders, &BucketClassifier::default());
        // L and S flow present, no X flow
        assert_eq!(ratios.xls_order_ratio, dec!(0));
    }

    #[test]
    fn test_empty_orders_give_zeros() {
        let ratios = calc_order_ratio_family(&[], &BucketClassifier::default());
        assert_eq!(ratios, OrderRatioFactors::default());
        assert_eq!(ratios.sum(), dec!(0));
    }
}
