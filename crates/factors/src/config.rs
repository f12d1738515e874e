//! Factor configuration
//!
//! Bucket thresholds and volume timing windows are plain values handed to
//! the classifier and the volume-ratio calculator, so a market or a test
//! can override them without touching global state.
//!
//! Supports JSON configuration files; every field is optional and falls
//! back to the defaults below:
//!
//! ```json
//! {
//!   "buckets": { "x_above": 1000000, "l_min": 200000, "m_min": 40000 },
//!   "windows": {
//!     "morning":   { "start": 925,  "end": 1000 },
//!     "afternoon": { "start": 1300, "end": 1330 }
//!   }
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tickfactor_core::{Amount, Hhmm};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Bucket thresholds must satisfy 0 < m_min < l_min <= x_above (got m_min={m_min}, l_min={l_min}, x_above={x_above})")]
    InvalidThresholds {
        m_min: Decimal,
        l_min: Decimal,
        x_above: Decimal,
    },
    #[error("Window {name} is empty: start={start}, end={end}")]
    InvalidWindow {
        name: &'static str,
        start: Hhmm,
        end: Hhmm,
    },
}

/// Amount thresholds separating the four size buckets (currency units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketThresholds {
    /// Strictly above this is X
    pub x_above: Amount,
    /// At or above this (and not X) is L
    pub l_min: Amount,
    /// At or above this (and below `l_min`) is M; anything lower is S
    pub m_min: Amount,
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self {
            x_above: dec!(1_000_000),
            l_min: dec!(200_000),
            m_min: dec!(40_000),
        }
    }
}

impl BucketThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.m_min > Decimal::ZERO && self.m_min < self.l_min && self.l_min <= self.x_above {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds {
                m_min: self.m_min,
                l_min: self.l_min,
                x_above: self.x_above,
            })
        }
    }
}

/// Half-open intraday window `[start, end)` on HHMM codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HhmmWindow {
    pub start: Hhmm,
    pub end: Hhmm,
}

impl HhmmWindow {
    pub const fn new(start: Hhmm, end: Hhmm) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, hhmm: Hhmm) -> bool {
        hhmm >= self.start && hhmm < self.end
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.start < self.end {
            Ok(())
        } else {
            Err(ConfigError::InvalidWindow {
                name,
                start: self.start,
                end: self.end,
            })
        }
    }
}

/// Morning and afternoon windows compared by the volume timing ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeWindows {
    pub morning: HhmmWindow,
    pub afternoon: HhmmWindow,
}

impl Default for VolumeWindows {
    fn default() -> Self {
        Self {
            morning: HhmmWindow::new(Hhmm::from_const(925), Hhmm::from_const(1000)),
            afternoon: HhmmWindow::new(Hhmm::from_const(1300), Hhmm::from_const(1330)),
        }
    }
}

impl VolumeWindows {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.morning.validate("morning")?;
        self.afternoon.validate("afternoon")
    }
}

/// Root configuration for the factor computation core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorConfig {
    pub buckets: BucketThresholds,
    pub windows: VolumeWindows,
}

impl FactorConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: FactorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.buckets.validate()?;
        self.windows.validate()
    }
}
