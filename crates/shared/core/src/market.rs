use std::fmt;

use serde::{Deserialize, Serialize};

/// Listing venue of a security, resolved from its symbol suffix
///
/// The driver uses this to pick a schema normalizer and to skip symbols
/// it has no normalizer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    Shenzhen,
    Shanghai,
}

impl Market {
    /// Resolve from a symbol such as `000001.SZ` or `600000.SH`
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let (_, suffix) = symbol.trim().rsplit_once('.')?;
        if suffix.eq_ignore_ascii_case("SZ") {
            Some(Market::Shenzhen)
        } else if suffix.eq_ignore_ascii_case("SH") {
            Some(Market::Shanghai)
        } else {
            None
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Market::Shenzhen => "SZ",
            Market::Shanghai => "SH",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
