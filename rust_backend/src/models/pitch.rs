//! Core domain model for pitch-by-pitch tracking data.
//!
//! One [`PitchRecord`] per tracked pitch event. Records are immutable once
//! loaded: the dataset lifecycle is load, filter, aggregate, discard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Batter handedness at the plate.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Stand {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl fmt::Display for Stand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stand::Left => write!(f, "L"),
            Stand::Right => write!(f, "R"),
        }
    }
}

/// Whether the ball-strike count favors the pitcher, the batter, or neither.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CountAdvantage {
    Pitcher,
    Even,
    Batter,
}

impl fmt::Display for CountAdvantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountAdvantage::Pitcher => write!(f, "pitcher"),
            CountAdvantage::Even => write!(f, "even"),
            CountAdvantage::Batter => write!(f, "batter"),
        }
    }
}

/// One row per tracked pitch event.
///
/// Categorical fields are drawn from fixed enumerations known at
/// filter-construction time. The optional metrics are absent on pitches
/// without the corresponding measurement (e.g. no `launch_speed` when the
/// ball was not put in play).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    pub pitcher_name: String,
    pub batter_name: String,
    /// Pitch type label, e.g. "4-Seam Fastball".
    pub pitch_name: String,
    pub stand: Stand,
    /// Ball-strike count at pitch time, e.g. "1-2".
    pub count: String,
    pub count_advantage: CountAdvantage,
    pub outs_when_up: u8,
    pub inning: u8,
    /// Categorical encoding of the base-occupancy state.
    pub runners_on_base: String,
    /// Scoring margin from the pitcher's side at pitch time.
    pub run_differential: i32,
    /// Times through the order, 1-based.
    pub tto: u8,
    /// 1.0 when the pitch was a strike, 0.0 otherwise.
    pub strike_ind: f64,
    /// 1.0 when the batter swung and missed, 0.0 otherwise.
    pub whiff_ind: f64,
    pub woba_value: Option<f64>,
    pub launch_speed: Option<f64>,
    pub release_spin_rate: Option<f64>,
    /// At-bat result, present only on the terminal pitch of an at-bat.
    pub events: Option<String>,
    /// Batted ball classification, present only when the ball was put in play.
    pub batted_ball_type: Option<String>,
}
