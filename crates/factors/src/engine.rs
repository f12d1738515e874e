//! Factor Engine
//!
//! Runs the three calculators over one symbol-day and assembles the
//! fixed `FactorResult`. Holds only configuration; every call is a pure
//! function of its input, so one engine can be shared across threads.

use log::debug;
use tickfactor_core::{FactorResult, NormalizedOrderRecord, NormalizedTradeRecord};

use crate::act::calc_act_family;
use crate::classifier::BucketClassifier;
use crate::config::FactorConfig;
use crate::order_ratio::calc_order_ratio_family;
use crate::volume_ratio::volume_ratio;

/// Normalized input for one symbol on one trading day
#[derive(Debug, Clone, Default)]
pub struct SymbolDay {
    pub symbol: String,
    pub trades: Vec<NormalizedTradeRecord>,
    pub orders: Vec<NormalizedOrderRecord>,
}

impl SymbolDay {
    pub fn new(
        symbol: impl Into<String>,
        trades: Vec<NormalizedTradeRecord>,
        orders: Vec<NormalizedOrderRecord>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            trades,
            orders,
        }
    }
}

/// Computes all factors for a symbol-day under one configuration
#[derive(Debug, Clone, Default)]
pub struct FactorEngine {
    config: FactorConfig,
    classifier: BucketClassifier,
}

impl FactorEngine {
    pub fn new(config: FactorConfig) -> Self {
        Self {
            classifier: BucketClassifier::new(config.buckets),
            config,
        }
    }

    pub fn config(&self) -> &FactorConfig {
        &self.config
    }

    pub fn compute(&self, day: &SymbolDay) -> FactorResult {
        debug!(
            "Computing factors for {} ({} trades, {} orders)",
            day.symbol,
            day.trades.len(),
            day.orders.len()
        );

        FactorResult::new(
            volume_ratio(&day.trades, &self.config.windows),
            calc_act_family(&day.trades, &self.classifier),
            calc_order_ratio_family(&day.orders, &self.classifier),
        )
    }
}

/// Compute all factors with the default configuration
pub fn compute_factors(day: &SymbolDay) -> FactorResult {
    FactorEngine::default().compute(day)
}
