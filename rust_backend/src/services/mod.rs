//! Service layer for summary analytics consumed by the renderer.
//!
//! Services turn a filtered record subset into the tables behind each
//! dashboard view. They never render, print, or mutate their input.

pub mod aggregate;
pub mod breakdowns;
pub mod compare;
pub mod tto;

pub use aggregate::aggregate;
pub use breakdowns::{
    batted_ball_breakdown, count_advantage_breakdown, count_breakdown, count_pitch_breakdown,
    number_of_pitches, partition_by, pitch_selection_breakdown, result_breakdown,
};
pub use compare::{
    compare_pitcher, league_pitcher_summary, percentile_ranks, CompareData, PitcherPercentiles,
};
pub use tto::{tto_summary, TtoPoint};
