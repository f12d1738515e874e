//! Factor Properties Integration Test
//!
//! Exercises the public API end to end:
//! 1. Aggregation conserves amount per side and per bucket set
//! 2. Imbalance ratios stay within [-1, 1]
//! 3. Order ratios sum to one whenever any order flow exists
//! 4. Bucket assignment ignores how an order-minute is split into rows
//! 5. Reference scenarios for ACT, order ratios and volume ratio

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tickfactor_core::{NormalizedOrderRecord, NormalizedTradeRecord, Side, SizeBucket};
use tickfactor_factors::{
    BucketClassifier, FactorEngine, SymbolDay, aggregation::order_bucket_totals,
    aggregation::trade_bucket_totals, calc_act_family, calc_order_ratio_family, compute_factors,
};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// Small deterministic generator so the fixtures are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn synthetic_trades(seed: u64, n: usize) -> Vec<NormalizedTradeRecord> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            let hour = [9, 10, 11, 13, 14][rng.below(5) as usize];
            let minute = rng.below(60) as u32;
            let side = if rng.below(2) == 0 { Side::Buy } else { Side::Sell };
            let volume = Decimal::from(100 * (1 + rng.below(500)));
            let price = Decimal::new(500 + rng.below(5_000) as i64, 2);
            NormalizedTradeRecord::new(
                at(hour, minute, rng.below(60) as u32),
                side,
                rng.below(40),
                rng.below(40),
                volume,
                price,
            )
            .unwrap()
        })
        .collect()
}

fn synthetic_orders(seed: u64, n: usize) -> Vec<NormalizedOrderRecord> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            NormalizedOrderRecord::new(
                at(10, rng.below(60) as u32, 0),
                rng.below(200),
                Decimal::from(100 * (1 + rng.below(3_000))),
                Decimal::new(500 + rng.below(5_000) as i64, 2),
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn test_trade_mode_conserves_amount_per_side() {
    let classifier = BucketClassifier::default();
    for seed in 1..20 {
        let trades = synthetic_trades(seed, 400);
        let totals = trade_bucket_totals(&trades, &classifier);

        for side in Side::ALL {
            let expected: Decimal = trades
                .iter()
                .filter(|t| t.side == side)
                .map(|t| t.amount)
                .sum();
            assert_eq!(totals.side_total(side), expected, "seed {seed} side {side}");
        }
    }
}

#[test]
fn test_order_mode_conserves_amount() {
    let classifier = BucketClassifier::default();
    for seed in 1..20 {
        let orders = synthetic_orders(seed, 300);
        let expected: Decimal = orders.iter().map(|o| o.amount).sum();
        assert_eq!(order_bucket_totals(&orders, &classifier).total(), expected);
    }
}

#[test]
fn test_act_family_is_bounded() {
    let classifier = BucketClassifier::default();
    for seed in 1..20 {
        let act = calc_act_family(&synthetic_trades(seed, 250), &classifier);
        for value in [act.act, act.l_act, act.m_act, act.s_act, act.x_act] {
            assert!(value >= dec!(-1) && value <= dec!(1), "seed {seed}: {value}");
        }
    }
}

#[test]
fn test_order_ratios_sum_to_one() {
    let classifier = BucketClassifier::default();
    for seed in 1..20 {
        let ratios = calc_order_ratio_family(&synthetic_orders(seed, 150), &classifier);
        let drift = (ratios.sum() - dec!(1)).abs();
        assert!(drift < dec!(0.000000000001), "seed {seed}: sum={}", ratios.sum());
    }
}

#[test]
fn test_row_splitting_does_not_change_buckets() {
    let classifier = BucketClassifier::default();

    // One 240,000 buy order printing against four sellers in one minute
    let split: Vec<_> = (0..4)
        .map(|i| {
            NormalizedTradeRecord::new(at(9, 40, i * 10), Side::Buy, 77, 500 + i as u64, dec!(6_000), dec!(10))
                .unwrap()
        })
        .collect();
    let single =
        vec![NormalizedTradeRecord::new(at(9, 40, 0), Side::Buy, 77, 500, dec!(24_000), dec!(10)).unwrap()];

    let split_totals = trade_bucket_totals(&split, &classifier);
    assert_eq!(split_totals, trade_bucket_totals(&single, &classifier));
    assert_eq!(split_totals.get(SizeBucket::L, Side::Buy), dec!(240_000));
    assert_eq!(split_totals.get(SizeBucket::S, Side::Buy), dec!(0));
}

#[test]
fn test_bucket_boundaries_move_flow() {
    let classifier = BucketClassifier::default();
    let one = |amount: Decimal| {
        vec![NormalizedTradeRecord::new(at(9, 30, 0), Side::Sell, 1, 2, amount, dec!(1)).unwrap()]
    };

    let below = trade_bucket_totals(&one(dec!(199_999)), &classifier);
    let at_l = trade_bucket_totals(&one(dec!(200_000)), &classifier);
    assert_eq!(below.get(SizeBucket::M, Side::Sell), dec!(199_999));
    assert_eq!(at_l.get(SizeBucket::L, Side::Sell), dec!(200_000));

    let top_l = trade_bucket_totals(&one(dec!(1_000_000)), &classifier);
    let over = trade_bucket_totals(&one(dec!(1_000_000.01)), &classifier);
    assert_eq!(top_l.get(SizeBucket::L, Side::Sell), dec!(1_000_000));
    assert_eq!(over.get(SizeBucket::X, Side::Sell), dec!(1_000_000.01));
}

#[test]
fn test_reference_day() {
    let _ = env_logger::try_init();

    let trades = vec![
        // Morning window
        NormalizedTradeRecord::new(at(9, 30, 5), Side::Buy, 1, 90, dec!(10_000), dec!(15)).unwrap(),
        NormalizedTradeRecord::new(at(9, 30, 40), Side::Sell, 91, 2, dec!(5_000), dec!(10)).unwrap(),
        // Afternoon window
        NormalizedTradeRecord::new(at(13, 10, 0), Side::Buy, 3, 92, dec!(7_500), dec!(2)).unwrap(),
    ];
    let orders = vec![
        NormalizedOrderRecord::new(at(9, 30, 0), 1, dec!(10_000), dec!(15)).unwrap(),
        NormalizedOrderRecord::new(at(9, 30, 0), 2, dec!(5_000), dec!(10)).unwrap(),
    ];

    let result = compute_factors(&SymbolDay::new("000001.SZ", trades, orders));

    // am = 15,000, pm = 7,500
    assert_eq!(result.volume_ratio, Some(dec!(2)));
    // 150,000 buy (M) vs 50,000 sell (M), 15,000 buy (S)
    assert_eq!(result.act.m_act, dec!(0.5));
    assert_eq!(result.act.act, dec!(0.5));
    assert_eq!(result.act.s_act, dec!(1));
    assert_eq!(result.act.l_act, dec!(0));
    assert_eq!(result.act.x_act, dec!(0));
    // Both orders are M
    assert_eq!(result.order_ratio.m_order_ratio, dec!(1));
    assert_eq!(result.order_ratio.xls_order_ratio, dec!(0));
}

#[test]
fn test_morning_only_day_has_undefined_volume_ratio() {
    let trades: Vec<_> = (0..35)
        .map(|i| {
            NormalizedTradeRecord::new(at(9, 25 + i, 0), Side::Buy, 1, 2, dec!(100), dec!(10)).unwrap()
        })
        .collect();

    let result = FactorEngine::default().compute(&SymbolDay::new("600000.SH", trades, vec![]));
    assert_eq!(result.volume_ratio, None);
    assert_eq!(result.order_ratio.sum(), dec!(0));
}
