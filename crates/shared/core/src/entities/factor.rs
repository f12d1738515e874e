use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Buy/sell imbalance ratios, one per size bucket plus the L+M composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActFactors {
    pub act: Decimal,
    pub l_act: Decimal,
    pub m_act: Decimal,
    pub s_act: Decimal,
    pub x_act: Decimal,
}

/// Share of the day's order amount falling in each size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderRatioFactors {
    /// X bucket only. The name is kept for compatibility with existing tables.
    pub xls_order_ratio: Decimal,
    pub l_order_ratio: Decimal,
    pub m_order_ratio: Decimal,
    pub s_order_ratio: Decimal,
}

impl OrderRatioFactors {
    /// Sum of the four bucket shares (1 when any order flow exists, else 0)
    pub fn sum(&self) -> Decimal {
        self.xls_order_ratio + self.l_order_ratio + self.m_order_ratio + self.s_order_ratio
    }
}

/// All factors computed for one symbol-day
///
/// `volume_ratio` is `None` when it is undefined (no afternoon volume).
/// The other factors are always defined; a missing bucket yields 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactorResult {
    pub volume_ratio: Option<Decimal>,
    pub act: ActFactors,
    pub order_ratio: OrderRatioFactors,
}

impl FactorResult {
    pub fn new(
        volume_ratio: Option<Decimal>,
        act: ActFactors,
        order_ratio: OrderRatioFactors,
    ) -> Self {
        Self {
            volume_ratio,
            act,
            order_ratio,
        }
    }

    /// Look up one factor by column name
    pub fn get(&self, name: FactorName) -> Option<Decimal> {
        match name {
            FactorName::VolumeRatio => self.volume_ratio,
            FactorName::Act => Some(self.act.act),
            FactorName::LAct => Some(self.act.l_act),
            FactorName::MAct => Some(self.act.m_act),
            FactorName::SAct => Some(self.act.s_act),
            FactorName::XAct => Some(self.act.x_act),
            FactorName::XlsOrderRatio => Some(self.order_ratio.xls_order_ratio),
            FactorName::LOrderRatio => Some(self.order_ratio.l_order_ratio),
            FactorName::MOrderRatio => Some(self.order_ratio.m_order_ratio),
            FactorName::SOrderRatio => Some(self.order_ratio.s_order_ratio),
        }
    }

    /// (column name, value) pairs in table column order
    pub fn entries(&self) -> impl Iterator<Item = (FactorName, Option<Decimal>)> + '_ {
        FactorName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }
}

/// Output column of the factor table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorName {
    VolumeRatio,
    Act,
    LAct,
    MAct,
    SAct,
    XAct,
    XlsOrderRatio,
    LOrderRatio,
    MOrderRatio,
    SOrderRatio,
}

impl FactorName {
    pub const ALL: [FactorName; 10] = [
        FactorName::VolumeRatio,
        FactorName::Act,
        FactorName::LAct,
        FactorName::MAct,
        FactorName::SAct,
        FactorName::XAct,
        FactorName::XlsOrderRatio,
        FactorName::LOrderRatio,
        FactorName::MOrderRatio,
        FactorName::SOrderRatio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactorName::VolumeRatio => "VOLUME_RATIO",
            FactorName::Act => "ACT",
            FactorName::LAct => "L_ACT",
            FactorName::MAct => "M_ACT",
            FactorName::SAct => "S_ACT",
            FactorName::XAct => "X_ACT",
            FactorName::XlsOrderRatio => "XLS_ORDER_RATIO",
            FactorName::LOrderRatio => "L_ORDER_RATIO",
            FactorName::MOrderRatio => "M_ORDER_RATIO",
            FactorName::SOrderRatio => "S_ORDER_RATIO",
        }
    }
}

impl fmt::Display for FactorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
