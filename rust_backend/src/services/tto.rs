//! Pitcher performance by times through the order.

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsResult;
use crate::models::{GroupKey, Metric, PitchRecord};
use crate::services::aggregate::aggregate;

/// One point per (pitcher, times-through-order) pair.
///
/// Rates are raw fractions; turning them into percentages and rounding is
/// the renderer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtoPoint {
    pub pitcher_name: String,
    pub tto: u8,
    pub pitches: usize,
    pub strike_rate: f64,
    pub whiff_rate: f64,
    pub woba: f64,
    pub launch_speed: f64,
    pub spin_rate: f64,
}

/// Summarize pitcher performance per times-through-order.
///
/// Groups the subset by `[pitcher_name, tto]` and reports pitch volume plus
/// the mean of every tracked metric. Means over groups with no measured
/// values come back NaN.
pub fn tto_summary(subset: &[PitchRecord]) -> AnalyticsResult<Vec<TtoPoint>> {
    let rows = aggregate(subset, &[GroupKey::PitcherName, GroupKey::Tto], &Metric::ALL)?;

    Ok(rows
        .into_iter()
        .map(|row| TtoPoint {
            pitcher_name: row.keys[0].clone(),
            tto: row.keys[1].parse().unwrap_or(0),
            pitches: row.count,
            strike_rate: row.mean(Metric::StrikeInd),
            whiff_rate: row.mean(Metric::WhiffInd),
            woba: row.mean(Metric::WobaValue),
            launch_speed: row.mean(Metric::LaunchSpeed),
            spin_rate: row.mean(Metric::ReleaseSpinRate),
        })
        .collect())
}
