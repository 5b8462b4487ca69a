//! Grouping vocabulary and summary output rows.
//!
//! The renderer consumes exactly these shapes; it performs no further
//! filtering or aggregation of its own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AnalyticsError;
use crate::models::pitch::PitchRecord;

/// Numeric per-pitch metrics that can be averaged per group.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    StrikeInd,
    WhiffInd,
    WobaValue,
    LaunchSpeed,
    ReleaseSpinRate,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::StrikeInd,
        Metric::WhiffInd,
        Metric::WobaValue,
        Metric::LaunchSpeed,
        Metric::ReleaseSpinRate,
    ];

    /// Metrics where a lower raw value favors the pitcher. Fixed list, never
    /// inferred; percentile ranks for these are inverted.
    pub const LOWER_IS_BETTER: [Metric; 2] = [Metric::WobaValue, Metric::LaunchSpeed];

    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::StrikeInd => "strike_ind",
            Metric::WhiffInd => "whiff_ind",
            Metric::WobaValue => "woba_value",
            Metric::LaunchSpeed => "launch_speed",
            Metric::ReleaseSpinRate => "release_spin_rate",
        }
    }

    /// The metric's value on one record, `None` when unmeasured.
    pub fn value(&self, record: &PitchRecord) -> Option<f64> {
        match self {
            Metric::StrikeInd => Some(record.strike_ind),
            Metric::WhiffInd => Some(record.whiff_ind),
            Metric::WobaValue => record.woba_value,
            Metric::LaunchSpeed => record.launch_speed,
            Metric::ReleaseSpinRate => record.release_spin_rate,
        }
    }

    pub fn lower_is_better(&self) -> bool {
        Self::LOWER_IS_BETTER.contains(self)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// Fields a summary can group by.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    PitcherName,
    BatterName,
    PitchName,
    Stand,
    Count,
    CountAdvantage,
    OutsWhenUp,
    Inning,
    RunnersOnBase,
    Tto,
    Events,
    BattedBallType,
}

impl GroupKey {
    pub fn column_name(&self) -> &'static str {
        match self {
            GroupKey::PitcherName => "pitcher_name",
            GroupKey::BatterName => "batter_name",
            GroupKey::PitchName => "pitch_name",
            GroupKey::Stand => "stand",
            GroupKey::Count => "count",
            GroupKey::CountAdvantage => "count_advantage",
            GroupKey::OutsWhenUp => "outs_when_up",
            GroupKey::Inning => "inning",
            GroupKey::RunnersOnBase => "runners_on_base",
            GroupKey::Tto => "tto",
            GroupKey::Events => "events",
            GroupKey::BattedBallType => "batted_ball_type",
        }
    }

    /// Group key value for one record. `None` when the field is absent on
    /// that row (`events`, `batted_ball_type`); such rows are skipped by the
    /// aggregator rather than grouped under a placeholder.
    pub fn value_of(&self, record: &PitchRecord) -> Option<String> {
        match self {
            GroupKey::PitcherName => Some(record.pitcher_name.clone()),
            GroupKey::BatterName => Some(record.batter_name.clone()),
            GroupKey::PitchName => Some(record.pitch_name.clone()),
            GroupKey::Stand => Some(record.stand.to_string()),
            GroupKey::Count => Some(record.count.clone()),
            GroupKey::CountAdvantage => Some(record.count_advantage.to_string()),
            GroupKey::OutsWhenUp => Some(record.outs_when_up.to_string()),
            GroupKey::Inning => Some(record.inning.to_string()),
            GroupKey::RunnersOnBase => Some(record.runners_on_base.clone()),
            GroupKey::Tto => Some(record.tto.to_string()),
            GroupKey::Events => record.events.clone(),
            GroupKey::BattedBallType => record.batted_ball_type.clone(),
        }
    }
}

impl FromStr for GroupKey {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pitcher_name" => Ok(GroupKey::PitcherName),
            "batter_name" => Ok(GroupKey::BatterName),
            "pitch_name" => Ok(GroupKey::PitchName),
            "stand" => Ok(GroupKey::Stand),
            "count" => Ok(GroupKey::Count),
            "count_advantage" => Ok(GroupKey::CountAdvantage),
            "outs_when_up" => Ok(GroupKey::OutsWhenUp),
            "inning" => Ok(GroupKey::Inning),
            "runners_on_base" => Ok(GroupKey::RunnersOnBase),
            "tto" => Ok(GroupKey::Tto),
            "events" => Ok(GroupKey::Events),
            "batted_ball_type" => Ok(GroupKey::BattedBallType),
            _ => Err(AnalyticsError::InvalidGroupKey(format!(
                "Unknown grouping field: {}",
                s
            ))),
        }
    }
}

/// One output row per distinct group key combination.
///
/// `keys` holds one value per requested group key, in request order.
/// `frequency` is normalized globally for a single-key grouping and within
/// the outer (first) key for a two-key grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub keys: Vec<String>,
    pub count: usize,
    pub frequency: f64,
    /// Mean of each requested metric over the group; NaN when the group has
    /// no measured values for the metric.
    pub means: BTreeMap<Metric, f64>,
}

impl SummaryRow {
    /// Mean for `metric`, NaN when the metric was not requested or has no data.
    pub fn mean(&self, metric: Metric) -> f64 {
        self.means.get(&metric).copied().unwrap_or(f64::NAN)
    }
}

/// Which field a breakdown view splits its panels by.
///
/// `None` is not "no split": it resolves to one panel per pitcher, matching
/// the dashboard's default view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakdownBy {
    Field(GroupKey),
    None,
}

impl BreakdownBy {
    pub fn resolve(&self) -> GroupKey {
        match self {
            BreakdownBy::Field(key) => *key,
            BreakdownBy::None => GroupKey::PitcherName,
        }
    }
}
