//! Tickfactor Factors
//!
//! The factor computation core. Turns one symbol-day of normalized tick
//! records into intraday microstructure factors:
//!
//! - **Volume ratio**: opening-window volume over early-afternoon volume
//! - **ACT family**: buy/sell amount imbalance per order-size bucket
//! - **Order-ratio family**: share of committed order amount per bucket
//!
//! ## Architecture
//!
//! ```text
//! trade records ──┬──► Aggregation (trade mode) ──► Classifier ──► ACT family
//!                 │     minute × true order id × side
//!                 │
//!                 └──► minute volumes ─────────────────────────► Volume ratio
//!
//! order records ─────► Aggregation (order mode) ──► Classifier ──► Order ratios
//!                       minute × order id
//! ```
//!
//! Bucket ratios read an empty bucket as 0. The volume ratio reads an empty
//! afternoon window as undefined.

pub mod act;
pub mod aggregation;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod order_ratio;
pub mod volume_ratio;

pub use act::calc_act_family;
pub use aggregation::{
    BucketTotals, OrderMinuteAggregate, SidedBucketTotals, aggregate_orders, aggregate_trades,
};
pub use classifier::{BucketClassifier, classify};
pub use config::{BucketThresholds, ConfigError, FactorConfig, HhmmWindow, VolumeWindows};
pub use engine::{FactorEngine, SymbolDay, compute_factors};
pub use order_ratio::calc_order_ratio_family;
pub use volume_ratio::volume_ratio;
