mod bucket;
mod factor;
mod order;
mod side;
mod trade;

pub use bucket::SizeBucket;
pub use factor::{ActFactors, FactorName, FactorResult, OrderRatioFactors};
pub use order::NormalizedOrderRecord;
pub use side::Side;
pub use trade::NormalizedTradeRecord;
