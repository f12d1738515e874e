//! Tickfactor Core Domain
//!
//! Pure domain types for intraday market-microstructure factors.
//! Normalized tick records go in, a fixed set of named factors comes out.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod market;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    ActFactors,
    FactorName,
    FactorResult,
    // Normalized tick records
    NormalizedOrderRecord,
    NormalizedTradeRecord,
    OrderRatioFactors,
    Side,
    SizeBucket,
};
pub use error::{RecordError, RecordResult};
pub use market::Market;
pub use values::{Amount, Hhmm, MAX_RECORD_VALUE, Minute, OrderId, Price, Volume, checked_amount};
