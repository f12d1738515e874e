//! Batch runner
//!
//! Computes factors for a list of symbols, one symbol-day at a time. A
//! symbol that cannot be loaded or computed is recorded and logged but
//! never stops the batch.
//!
//! ## Flow per symbol
//!
//! ```text
//! symbol ──► SymbolSource::load ──► Market::from_symbol ──► FactorEngine::compute
//!               │ None / Err             │ unknown
//!               ▼                        ▼
//!         skipped / failed            skipped
//! ```
//!
//! In parallel mode symbols are spread over the rayon pool. Results are
//! gathered first and written to the table afterwards on the calling
//! thread, so table writes never race.

use std::fmt;
use std::time::{Duration, Instant};

use log::{error, info, warn};
use rayon::prelude::*;
use tickfactor_core::{FactorResult, Market};
use tickfactor_factors::{FactorConfig, FactorEngine};

use crate::source::SymbolSource;
use crate::table::FactorTable;

/// Why a symbol produced no factors without failing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Trade or order data not available
    MissingData,
    /// Symbol suffix maps to no supported market
    UnknownMarket,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingData => f.write_str("missing data"),
            SkipReason::UnknownMarket => f.write_str("unknown market"),
        }
    }
}

/// Outcome of one symbol
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutcome {
    Computed(FactorResult),
    Skipped(SkipReason),
    Failed(String),
}

/// Everything a batch run produced, in input symbol order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub computed: Vec<(String, FactorResult)>,
    pub skipped: Vec<(String, SkipReason)>,
    pub failed: Vec<(String, String)>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.computed.len() + self.skipped.len() + self.failed.len()
    }

    pub fn result(&self, symbol: &str) -> Option<&FactorResult> {
        self.computed
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, r)| r)
    }

    /// Write every computed result into the table
    pub fn apply_to(&self, table: &mut FactorTable) {
        for (symbol, result) in &self.computed {
            table.upsert(symbol, result);
        }
    }

    fn record(&mut self, symbol: String, outcome: SymbolOutcome) {
        match outcome {
            SymbolOutcome::Computed(result) => self.computed.push((symbol, result)),
            SymbolOutcome::Skipped(reason) => self.skipped.push((symbol, reason)),
            SymbolOutcome::Failed(message) => self.failed.push((symbol, message)),
        }
    }
}

/// Runs the factor engine over many symbols with per-symbol isolation
pub struct BatchRunner<S: SymbolSource> {
    source: S,
    engine: FactorEngine,
    parallel: bool,
}

impl<S: SymbolSource> BatchRunner<S> {
    pub fn new(source: S, config: FactorConfig) -> Self {
        Self {
            source,
            engine: FactorEngine::new(config),
            parallel: false,
        }
    }

    /// Spread symbols over the rayon thread pool
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Process one symbol; load and record failures become outcomes, never Err
    ///
    /// Missing data is checked before the market suffix.
    pub fn process(&self, symbol: &str) -> SymbolOutcome {
        let day = match self.source.load(symbol) {
            Ok(Some(day)) => day,
            Ok(None) => {
                warn!("[SKIP] Missing data: {}", symbol);
                return SymbolOutcome::Skipped(SkipReason::MissingData);
            }
            Err(e) => {
                error!("[ERROR] {}: {}", symbol, e);
                return SymbolOutcome::Failed(e.to_string());
            }
        };

        if Market::from_symbol(symbol).is_none() {
            warn!("[SKIP] Unknown market: {}", symbol);
            return SymbolOutcome::Skipped(SkipReason::UnknownMarket);
        }

        let result = self.engine.compute(&day);
        info!(
            "{}: {} trades, {} orders, ACT={}",
            symbol,
            day.trades.len(),
            day.orders.len(),
            result.act.act
        );
        SymbolOutcome::Computed(result)
    }

    /// Process all symbols and collect the outcomes in input order
    pub fn run<T: AsRef<str> + Sync>(&self, symbols: &[T]) -> BatchReport {
        let started = Instant::now();

        let outcomes: Vec<SymbolOutcome> = if self.parallel {
            symbols
                .par_iter()
                .map(|s| self.process(s.as_ref()))
                .collect()
        } else {
            symbols.iter().map(|s| self.process(s.as_ref())).collect()
        };

        let mut report = BatchReport::default();
        for (symbol, outcome) in symbols.iter().zip(outcomes) {
            report.record(symbol.as_ref().to_string(), outcome);
        }
        report.elapsed = started.elapsed();

        info!(
            "Batch complete in {:?}: {} computed, {} skipped, {} failed",
            report.elapsed,
            report.computed.len(),
            report.skipped.len(),
            report.failed.len()
        );
        report
    }

    /// Run over the table's own symbols and write the results back into it
    pub fn run_table(&self, table: &mut FactorTable) -> BatchReport {
        let symbols = table.symbols();
        let report = self.run(&symbols);
        report.apply_to(table);
        report
    }
}
