//! Tickfactor Runner - batch factor computation over many symbols
//!
//! Drives the factor core across a symbol list:
//!
//! - **Source**: loads one normalized symbol-day (`SymbolSource` port)
//! - **Batch**: computes every symbol in isolation, sequentially or on rayon
//! - **Table**: collects one row per symbol and persists it as CSV
//!
//! ## Architecture
//!
//! ```text
//!   factor table (symbols) ──► BatchRunner ──► SymbolSource::load
//!                                  │
//!                                  ▼
//!                           FactorEngine::compute   (one symbol-day each)
//!                                  │
//!                                  ▼
//!                             BatchReport ──► FactorTable::write_csv
//! ```

pub mod batch;
pub mod error;
pub mod source;
pub mod table;

// Re-export main types
pub use batch::{BatchReport, BatchRunner, SkipReason, SymbolOutcome};
pub use error::{Result, RunnerError};
pub use source::{CsvDirectorySource, InMemorySource, SymbolSource};
pub use table::{Cell, DEFAULT_PRECISION, FactorTable};
