//! Per-visualization breakdown summaries.
//!
//! Each dashboard view is backed by one named wrapper around the aggregator,
//! so callers never hand-pick group keys at the call site.

use std::collections::BTreeMap;

use crate::error::AnalyticsResult;
use crate::models::{BreakdownBy, GroupKey, PitchRecord, SummaryRow};
use crate::services::aggregate::aggregate;

/// Number of pitches surviving the dashboard filters (the headline stat).
pub fn number_of_pitches(subset: &[PitchRecord]) -> usize {
    subset.len()
}

/// Relative frequency of each pitch type.
pub fn pitch_selection_breakdown(subset: &[PitchRecord]) -> AnalyticsResult<Vec<SummaryRow>> {
    aggregate(subset, &[GroupKey::PitchName], &[])
}

/// Relative frequency of each ball-strike count.
pub fn count_breakdown(subset: &[PitchRecord]) -> AnalyticsResult<Vec<SummaryRow>> {
    aggregate(subset, &[GroupKey::Count], &[])
}

/// Pitch type mix within each ball-strike count; frequencies normalize per
/// count, feeding the stacked bar view.
pub fn count_pitch_breakdown(subset: &[PitchRecord]) -> AnalyticsResult<Vec<SummaryRow>> {
    aggregate(subset, &[GroupKey::Count, GroupKey::PitchName], &[])
}

/// Pitch type mix within each count-advantage state.
pub fn count_advantage_breakdown(subset: &[PitchRecord]) -> AnalyticsResult<Vec<SummaryRow>> {
    aggregate(subset, &[GroupKey::CountAdvantage, GroupKey::PitchName], &[])
}

/// At-bat result mix. Pitches without a terminal event are skipped.
pub fn result_breakdown(subset: &[PitchRecord]) -> AnalyticsResult<Vec<SummaryRow>> {
    aggregate(subset, &[GroupKey::Events], &[])
}

/// Batted ball type mix. Pitches not put in play are skipped.
pub fn batted_ball_breakdown(subset: &[PitchRecord]) -> AnalyticsResult<Vec<SummaryRow>> {
    aggregate(subset, &[GroupKey::BattedBallType], &[])
}

/// Partition `subset` by the breakdown category, largest partition first.
///
/// Feeds the per-category panel grids (pitch location views). Rows where the
/// category is absent are dropped; within a partition the original record
/// order is preserved.
pub fn partition_by<'a>(
    subset: &'a [PitchRecord],
    breakdown: &BreakdownBy,
) -> Vec<(String, Vec<&'a PitchRecord>)> {
    let key = breakdown.resolve();

    let mut partitions: BTreeMap<String, Vec<&PitchRecord>> = BTreeMap::new();
    for record in subset {
        if let Some(value) = key.value_of(record) {
            partitions.entry(value).or_default().push(record);
        }
    }

    let mut partitions: Vec<_> = partitions.into_iter().collect();
    // Stable sort on top of the lexical map order: equal sizes stay lexical.
    partitions.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountAdvantage, Stand};

    fn record(pitcher: &str, pitch: &str) -> PitchRecord {
        PitchRecord {
            pitcher_name: pitcher.to_string(),
            batter_name: "Machado".to_string(),
            pitch_name: pitch.to_string(),
            stand: Stand::Left,
            count: "0-0".to_string(),
            count_advantage: CountAdvantage::Even,
            outs_when_up: 0,
            inning: 1,
            runners_on_base: "Empty".to_string(),
            run_differential: 0,
            tto: 1,
            strike_ind: 0.0,
            whiff_ind: 0.0,
            woba_value: None,
            launch_speed: None,
            release_spin_rate: None,
            events: None,
            batted_ball_type: None,
        }
    }

    #[test]
    fn test_pitch_selection_breakdown() {
        let records = vec![
            record("Buehler", "Fastball"),
            record("Buehler", "Fastball"),
            record("Buehler", "Slider"),
        ];

        let rows = pitch_selection_breakdown(&records).unwrap();
        assert_eq!(rows.len(), 2);
        let total: f64 = rows.iter().map(|r| r.frequency).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partition_by_none_partitions_by_pitcher() {
        let records = vec![
            record("Buehler", "Fastball"),
            record("Scherzer", "Slider"),
            record("Buehler", "Curveball"),
        ];

        let partitions = partition_by(&records, &BreakdownBy::None);
        assert_eq!(partitions.len(), 2);
        assert_eq!(partitions[0].0, "Buehler");
        assert_eq!(partitions[0].1.len(), 2);
        assert_eq!(partitions[1].0, "Scherzer");
    }

    #[test]
    fn test_partition_by_field_orders_by_size() {
        let records = vec![
            record("Buehler", "Slider"),
            record("Buehler", "Fastball"),
            record("Buehler", "Slider"),
        ];

        let partitions = partition_by(&records, &BreakdownBy::Field(GroupKey::PitchName));
        assert_eq!(partitions[0].0, "Slider");
        assert_eq!(partitions[1].0, "Fastball");
    }

    #[test]
    fn test_batted_ball_breakdown_skips_missing() {
        let mut in_play = record("Buehler", "Fastball");
        in_play.batted_ball_type = Some("ground_ball".to_string());
        let records = vec![in_play, record("Buehler", "Slider")];

        let rows = batted_ball_breakdown(&records).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 1);
    }

    #[test]
    fn test_number_of_pitches() {
        let records = vec![record("Buehler", "Fastball")];
        assert_eq!(number_of_pitches(&records), 1);
        assert_eq!(number_of_pitches(&[]), 0);
    }
}
