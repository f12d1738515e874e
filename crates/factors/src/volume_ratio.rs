//! Volume timing ratio: opening-window volume over early-afternoon volume
//!
//! Unlike the bucket ratios this one has no safe default. A day with no
//! afternoon volume is abnormal and is reported as undefined (`None`).

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;
use tickfactor_core::{Hhmm, NormalizedTradeRecord, Volume};

use crate::config::{HhmmWindow, VolumeWindows};

/// Traded volume per intraday minute code
///
/// Each record's volume is capped at `MAX_RECORD_VALUE`, so the sums cannot overflow.
pub fn minute_volumes(trades: &[NormalizedTradeRecord]) -> BTreeMap<Hhmm, Volume> {
    let mut volumes: BTreeMap<Hhmm, Volume> = BTreeMap::new();
    for trade in trades {
        *volumes.entry(trade.hhmm).or_default() += trade.volume;
    }
    volumes
}

/// Total volume of the minutes falling inside a window
pub fn window_volume(volumes: &BTreeMap<Hhmm, Volume>, window: &HhmmWindow) -> Volume {
    volumes
        .iter()
        .filter(|(hhmm, _)| window.contains(**hhmm))
        .map(|(_, v)| *v)
        .sum()
}

/// `morning / afternoon`, or `None` when the afternoon window is empty
pub fn volume_ratio(trades: &[NormalizedTradeRecord], windows: &VolumeWindows) -> Option<Decimal> {
    if trades.is_empty() {
        return None;
    }

    let volumes = minute_volumes(trades);
    let am = window_volume(&volumes, &windows.morning);
    let pm = window_volume(&volumes, &windows.afternoon);
    debug!("Volume windows: am={} pm={}", am, pm);

    am.checked_div(pm)
}
