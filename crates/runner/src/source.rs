//! Symbol data sources
//!
//! The batch runner pulls one normalized symbol-day at a time through the
//! `SymbolSource` port. Returning `Ok(None)` means the data for that symbol
//! is simply not there and the symbol is skipped; `Err` is a real failure
//! and is reported against the symbol.
//!
//! `CsvDirectorySource` expects one directory per symbol:
//!
//! ```text
//! <root>/000001.SZ/trades.csv   time,side,buy_order_id,sell_order_id,volume,price
//! <root>/000001.SZ/orders.csv   time,order_id,volume,price
//! ```
//!
//! with `time` in ISO-8601 form (`2024-01-02T09:30:15.120`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tickfactor_core::{NormalizedOrderRecord, NormalizedTradeRecord, Side};
use tickfactor_factors::SymbolDay;

use crate::error::{Result, RunnerError};

pub const TRADES_FILE: &str = "trades.csv";
pub const ORDERS_FILE: &str = "orders.csv";

/// Port for loading one symbol-day of normalized records
pub trait SymbolSource: Send + Sync {
    fn load(&self, symbol: &str) -> Result<Option<SymbolDay>>;
}

/// Symbol-days held in memory, keyed by symbol
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    days: HashMap<String, SymbolDay>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: SymbolDay) {
        self.days.insert(day.symbol.clone(), day);
    }

    pub fn with_day(mut self, day: SymbolDay) -> Self {
        self.insert(day);
        self
    }
}

impl SymbolSource for InMemorySource {
    fn load(&self, symbol: &str) -> Result<Option<SymbolDay>> {
        Ok(self.days.get(symbol).cloned())
    }
}

/// Reads normalized trade and order CSVs from `<root>/<symbol>/`
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    root: PathBuf,
}

impl CsvDirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn symbol_dir(&self, symbol: &str) -> PathBuf {
        self.root.join(symbol)
    }
}

impl SymbolSource for CsvDirectorySource {
    fn load(&self, symbol: &str) -> Result<Option<SymbolDay>> {
        let dir = self.symbol_dir(symbol);
        let trades_path = dir.join(TRADES_FILE);
        let orders_path = dir.join(ORDERS_FILE);

        if !trades_path.is_file() || !orders_path.is_file() {
            return Ok(None);
        }

        let trades = read_trades(&trades_path)?;
        let orders = read_orders(&orders_path)?;
        Ok(Some(SymbolDay::new(symbol, trades, orders)))
    }
}

#[derive(Debug, Deserialize)]
struct TradeRow {
    time: NaiveDateTime,
    side: Side,
    buy_order_id: u64,
    sell_order_id: u64,
    volume: String,
    price: String,
}

#[derive(Debug, Deserialize)]
struct OrderRow {
    time: NaiveDateTime,
    order_id: u64,
    volume: String,
    price: String,
}

/// Read a normalized trade file
pub fn read_trades(path: &Path) -> Result<Vec<NormalizedTradeRecord>> {
    read_rows(path, |row: TradeRow, line| {
        NormalizedTradeRecord::new(
            row.time,
            row.side,
            row.buy_order_id,
            row.sell_order_id,
            parse_decimal(path, line, &row.volume)?,
            parse_decimal(path, line, &row.price)?,
        )
        .map_err(|source| RunnerError::InvalidRecord {
            path: path.to_path_buf(),
            row: line,
            source,
        })
    })
}

/// Read a normalized order file
pub fn read_orders(path: &Path) -> Result<Vec<NormalizedOrderRecord>> {
    read_rows(path, |row: OrderRow, line| {
        NormalizedOrderRecord::new(
            row.time,
            row.order_id,
            parse_decimal(path, line, &row.volume)?,
            parse_decimal(path, line, &row.price)?,
        )
        .map_err(|source| RunnerError::InvalidRecord {
            path: path.to_path_buf(),
            row: line,
            source,
        })
    })
}

fn read_rows<R, T, F>(path: &Path, mut convert: F) -> Result<Vec<T>>
where
    R: DeserializeOwned,
    F: FnMut(R, usize) -> Result<T>,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| RunnerError::csv(path, e))?;

    let mut out = Vec::new();
    for (i, row) in reader.deserialize::<R>().enumerate() {
        let row = row.map_err(|e| RunnerError::csv(path, e))?;
        // Data rows start on line 2, after the header
        out.push(convert(row, i + 2)?);
    }
    Ok(out)
}

// Decimals are parsed from text so prices keep their exact scale
fn parse_decimal(path: &Path, row: usize, value: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|_| RunnerError::InvalidDecimal {
        path: path.to_path_buf(),
        row,
        value: value.to_string(),
    })
}
