//! Factor table
//!
//! The persisted output: one row per symbol, the first column is the
//! symbol index, then any columns carried over from an existing table file,
//! then the factor columns. Factor values are written with a fixed number
//! of decimal places; undefined values are written as empty cells.

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use tickfactor_core::{FactorName, FactorResult};

use crate::error::{Result, RunnerError};

/// Decimal places used when none is given
pub const DEFAULT_PRECISION: u32 = 10;

const DEFAULT_INDEX_NAME: &str = "symbol";

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Carried over verbatim from a loaded table
    Text(String),
    /// Computed factor; `None` is undefined
    Factor(Option<Decimal>),
}

#[derive(Debug, Clone, Default)]
struct Row {
    symbol: String,
    cells: HashMap<String, Cell>,
}

/// Symbol-indexed table of factor values
#[derive(Debug, Clone)]
pub struct FactorTable {
    index_name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
    /// symbol -> position in `rows`
    positions: HashMap<String, usize>,
}

impl Default for FactorTable {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl FactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty rows for the given symbols, in order
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for symbol in symbols {
            table.ensure_row(symbol.into());
        }
        table
    }

    /// Load an existing table; the first header column is the symbol index
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| RunnerError::csv(path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| RunnerError::csv(path, e))?
            .clone();
        let Some(index_name) = headers.get(0) else {
            return Err(RunnerError::MissingHeader(path.to_path_buf()));
        };

        let mut table = Self {
            index_name: index_name.to_string(),
            columns: headers.iter().skip(1).map(str::to_string).collect(),
            ..Self::default()
        };

        for record in reader.records() {
            let record = record.map_err(|e| RunnerError::csv(path, e))?;
            let Some(symbol) = record.get(0) else { continue };
            if symbol.is_empty() {
                continue;
            }
            let pos = table.ensure_row(symbol.to_string());
            for (column, value) in table.columns.iter().zip(record.iter().skip(1)) {
                table.rows[pos]
                    .cells
                    .insert(column.clone(), Cell::Text(value.to_string()));
            }
        }

        Ok(table)
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Symbols in row order
    pub fn symbols(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.symbol.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write all factor values of one symbol, adding the row and any
    /// missing factor columns
    pub fn upsert(&mut self, symbol: &str, result: &FactorResult) {
        for name in FactorName::ALL {
            if !self.columns.iter().any(|c| c == name.as_str()) {
                self.columns.push(name.as_str().to_string());
            }
        }

        let pos = self.ensure_row(symbol.to_string());
        let cells = &mut self.rows[pos].cells;
        for (name, value) in result.entries() {
            cells.insert(name.as_str().to_string(), Cell::Factor(value));
        }
    }

    pub fn get(&self, symbol: &str, column: &str) -> Option<&Cell> {
        let pos = *self.positions.get(symbol)?;
        self.rows[pos].cells.get(column)
    }

    /// Computed factor value, `None` when unset or undefined
    pub fn factor(&self, symbol: &str, name: FactorName) -> Option<Decimal> {
        match self.get(symbol, name.as_str())? {
            Cell::Factor(value) => *value,
            Cell::Text(_) => None,
        }
    }

    /// Persist with factor values rounded to `precision` decimal places
    pub fn write_csv<P: AsRef<Path>>(&self, path: P, precision: u32) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path).map_err(|e| RunnerError::csv(path, e))?;

        let header = std::iter::once(self.index_name.as_str())
            .chain(self.columns.iter().map(String::as_str));
        writer
            .write_record(header)
            .map_err(|e| RunnerError::csv(path, e))?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(self.columns.len() + 1);
            record.push(row.symbol.clone());
            for column in &self.columns {
                record.push(match row.cells.get(column) {
                    Some(cell) => format_cell(cell, precision),
                    None => String::new(),
                });
            }
            writer
                .write_record(&record)
                .map_err(|e| RunnerError::csv(path, e))?;
        }

        writer
            .flush()
            .map_err(|e| RunnerError::csv(path, csv::Error::from(e)))?;
        Ok(())
    }

    fn ensure_row(&mut self, symbol: String) -> usize {
        if let Some(pos) = self.positions.get(&symbol) {
            return *pos;
        }
        let pos = self.rows.len();
        self.positions.insert(symbol.clone(), pos);
        self.rows.push(Row {
            symbol,
            cells: HashMap::new(),
        });
        pos
    }
}

/// Fixed-point rendering; undefined factors become empty cells
pub fn format_cell(cell: &Cell, precision: u32) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Factor(Some(value)) => {
            let rounded = value.round_dp(precision);
            format!("{:.*}", precision as usize, rounded)
        }
        Cell::Factor(None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;
    use tickfactor_core::{ActFactors, OrderRatioFactors};

    fn sample_result() -> FactorResult {
        FactorResult::new(
            None,
            ActFactors {
                act: dec!(0.5),
                m_act: dec!(0.5),
                ..Default::default()
            },
            OrderRatioFactors {
                m_order_ratio: dec!(1),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&Cell::Factor(Some(dec!(0.5))), 4), "0.5000");
        assert_eq!(format_cell(&Cell::Factor(Some(dec!(1) / dec!(3))), 10), "0.3333333333");
        assert_eq!(format_cell(&Cell::Factor(Some(dec!(-0.123456))), 2), "-0.12");
        assert_eq!(format_cell(&Cell::Factor(None), 10), "");
        assert_eq!(format_cell(&Cell::Text("abc".into()), 10), "abc");
    }

    #[test]
    fn test_upsert_adds_factor_columns() {
        let mut table = FactorTable::from_symbols(["000001.SZ", "600000.SH"]);
        assert!(table.columns().is_empty());

        table.upsert("000001.SZ", &sample_result());
        assert_eq!(table.columns().len(), FactorName::ALL.len());
        assert_eq!(table.factor("000001.SZ", FactorName::MAct), Some(dec!(0.5)));
        assert_eq!(table.factor("000001.SZ", FactorName::VolumeRatio), None);
        assert_eq!(
            table.get("000001.SZ", "VOLUME_RATIO"),
            Some(&Cell::Factor(None))
        );
        assert_eq!(table.get("600000.SH", "ACT"), None);
    }

    #[test]
    fn test_read_preserves_extra_columns_and_writes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factors.csv");
        fs::write(&path, ",NAME,ACT\n000001.SZ,Ping An,0.1\n600000.SH,SPDB,\n").unwrap();

        let mut table = FactorTable::read_csv(&path).unwrap();
        assert_eq!(table.index_name(), "");
        assert_eq!(table.symbols(), vec!["000001.SZ", "600000.SH"]);

        table.upsert("000001.SZ", &sample_result());
        // ACT keeps its position, the rest are appended
        assert_eq!(&table.columns()[..2], &["NAME".to_string(), "ACT".to_string()]);
        table.write_csv(&path, 4).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next().unwrap(),
            ",NAME,ACT,VOLUME_RATIO,L_ACT,M_ACT,S_ACT,X_ACT,XLS_ORDER_RATIO,L_ORDER_RATIO,M_ORDER_RATIO,S_ORDER_RATIO"
        );
        assert_eq!(
            lines.next().unwrap(),
            "000001.SZ,Ping An,0.5000,,0.0000,0.5000,0.0000,0.0000,0.0000,0.0000,1.0000,0.0000"
        );
        assert_eq!(lines.next().unwrap(), "600000.SH,SPDB,,,,,,,,,,");
    }
}
