use std::fmt;

use serde::{Deserialize, Serialize};

/// Size class of one order's activity within one minute
///
/// Variants are declared smallest first, so the derived ordering is
/// S < M < L < X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeBucket {
    /// Small
    S,
    /// Medium
    M,
    /// Large
    L,
    /// Extra large
    X,
}

impl SizeBucket {
    pub const ALL: [SizeBucket; 4] = [SizeBucket::S, SizeBucket::M, SizeBucket::L, SizeBucket::X];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeBucket::S => "S",
            SizeBucket::M => "M",
            SizeBucket::L => "L",
            SizeBucket::X => "X",
        }
    }

    /// Dense index, usable for fixed-size tables
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
