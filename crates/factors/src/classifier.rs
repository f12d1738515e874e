//! Bucket Classifier
//!
//! Maps the total amount of one order's activity within one minute to a
//! size bucket. Thresholds are evaluated from the largest bucket down:
//!
//! | Bucket | Amount range (default)          |
//! |--------|---------------------------------|
//! | X      | amount > 1,000,000              |
//! | L      | 200,000 <= amount <= 1,000,000  |
//! | M      | 40,000 <= amount < 200,000      |
//! | S      | amount < 40,000                 |
//!
//! Negative amounts cannot come out of the record constructors; if one is
//! passed in anyway it lands in S.

use tickfactor_core::{Amount, SizeBucket};

use crate::config::BucketThresholds;

/// Stateless amount -> bucket mapping over a fixed set of thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketClassifier {
    thresholds: BucketThresholds,
}

impl BucketClassifier {
    pub fn new(thresholds: BucketThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &BucketThresholds {
        &self.thresholds
    }

    #[inline]
    pub fn classify(&self, amount: Amount) -> SizeBucket {
        classify(amount, &self.thresholds)
    }
}

/// Classify an amount against explicit thresholds
#[inline]
pub fn classify(amount: Amount, thresholds: &BucketThresholds) -> SizeBucket {
    if amount > thresholds.x_above {
        SizeBucket::X
    } else if amount >= thresholds.l_min {
        SizeBucket::L
    } else if amount >= thresholds.m_min {
        SizeBucket::M
    } else {
        SizeBucket::S
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_buckets() {
        let c = BucketClassifier::default();
        assert_eq!(c.classify(dec!(10_000)), SizeBucket::S);
        assert_eq!(c.classify(dec!(50_000)), SizeBucket::M);
        assert_eq!(c.classify(dec!(150_000)), SizeBucket::M);
        assert_eq!(c.classify(dec!(500_000)), SizeBucket::L);
        assert_eq!(c.classify(dec!(5_000_000)), SizeBucket::X);
    }

    #[test]
    fn test_boundaries_are_exact() {
        let c = BucketClassifier::default();
        assert_eq!(c.classify(dec!(39_999.99)), SizeBucket::S);
        assert_eq!(c.classify(dec!(40_000)), SizeBucket::M);
        assert_eq!(c.classify(dec!(199_999)), SizeBucket::M);
        assert_eq!(c.classify(dec!(200_000)), SizeBucket::L);
        assert_eq!(c.classify(dec!(1_000_000)), SizeBucket::L);
        assert_eq!(c.classify(dec!(1_000_000.01)), SizeBucket::X);
    }

    #[test]
    fn test_zero_and_negative_are_small() {
        let c = BucketClassifier::default();
        assert_eq!(c.classify(dec!(0)), SizeBucket::S);
        assert_eq!(c.classify(dec!(-1)), SizeBucket::S);
    }

    #[test]
    fn test_custom_thresholds() {
        let c = BucketClassifier::new(BucketThresholds {
            x_above: dec!(100),
            l_min: dec!(50),
            m_min: dec!(10),
        });
        assert_eq!(c.classify(dec!(9)), SizeBucket::S);
        assert_eq!(c.classify(dec!(10)), SizeBucket::M);
        assert_eq!(c.classify(dec!(100)), SizeBucket::L);
        assert_eq!(c.classify(dec!(101)), SizeBucket::X);
    }
}
