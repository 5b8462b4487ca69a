//! League-wide pitcher comparison: per-pitcher means, percentile ranks, and
//! the focus-pitcher-vs-rest table.
//!
//! All functions here expect the league-wide subset, i.e. records filtered
//! with [`FilterSpec::without_pitcher`](crate::transformations::FilterSpec::without_pitcher),
//! so every pitcher competes under the same scope.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AnalyticsResult;
use crate::models::{GroupKey, Metric, PitchRecord, SummaryRow};
use crate::services::aggregate::{aggregate, metric_mean};

/// Per-metric league percentile ranks for one pitcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherPercentiles {
    pub pitcher_name: String,
    pub percentiles: BTreeMap<Metric, f64>,
}

/// Comparison of a focus pitcher against the rest of the league: metric
/// means for both sides plus the focus pitcher's percentile ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareData {
    pub pitcher_name: String,
    pub focus_means: BTreeMap<Metric, f64>,
    pub rest_of_league_means: BTreeMap<Metric, f64>,
    pub percentiles: BTreeMap<Metric, f64>,
}

/// Per-pitcher means of every tracked metric over the league-wide subset.
pub fn league_pitcher_summary(subset: &[PitchRecord]) -> AnalyticsResult<Vec<SummaryRow>> {
    aggregate(subset, &[GroupKey::PitcherName], &Metric::ALL)
}

/// Fractional average-rank percentile of each value: `rank / n * 100`, where
/// tied values share the average of their ranks. NaN inputs are excluded
/// from the ranking and stay NaN in the output.
fn fractional_rank_pct(values: &[f64]) -> Vec<f64> {
    let mut indexed: Vec<(usize, f64)> = values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .collect();
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let n = indexed.len();
    let mut out = vec![f64::NAN; values.len()];

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && indexed[j + 1].1 == indexed[i].1 {
            j += 1;
        }
        // Ranks are 1-based; a tie run [i, j] shares the average rank.
        let avg_rank = (i + j + 2) as f64 / 2.0;
        let pct = avg_rank / n as f64 * 100.0;
        for entry in &indexed[i..=j] {
            out[entry.0] = pct;
        }
        i = j + 1;
    }

    out
}

/// League percentile ranks of each pitcher's metric means.
///
/// Ranks for the lower-is-better metrics (wOBA, exit velocity) are inverted
/// to `100 - pct`, so 100 always reads as favorable to the pitcher.
pub fn percentile_ranks(summary: &[SummaryRow]) -> Vec<PitcherPercentiles> {
    let mut result: Vec<PitcherPercentiles> = summary
        .iter()
        .map(|row| PitcherPercentiles {
            pitcher_name: row.keys[0].clone(),
            percentiles: BTreeMap::new(),
        })
        .collect();

    for metric in Metric::ALL {
        let means: Vec<f64> = summary.iter().map(|row| row.mean(metric)).collect();
        let pcts = fractional_rank_pct(&means);

        for (entry, pct) in result.iter_mut().zip(pcts) {
            let pct = if metric.lower_is_better() && !pct.is_nan() {
                100.0 - pct
            } else {
                pct
            };
            entry.percentiles.insert(metric, pct);
        }
    }

    result
}

/// Build the focus-pitcher-vs-rest comparison from the league-wide subset.
///
/// A focus pitcher with no rows in the subset is tolerated: the focus side
/// reports NaN means and NaN percentiles, and the renderer shows "no data".
pub fn compare_pitcher(
    subset: &[PitchRecord],
    pitcher_name: &str,
) -> AnalyticsResult<CompareData> {
    let summary = league_pitcher_summary(subset)?;
    let ranks = percentile_ranks(&summary);

    let percentiles = match ranks.into_iter().find(|p| p.pitcher_name == pitcher_name) {
        Some(entry) => entry.percentiles,
        None => {
            log::warn!(
                "pitcher {:?} has no pitches in the league subset",
                pitcher_name
            );
            Metric::ALL.iter().map(|&m| (m, f64::NAN)).collect()
        }
    };

    let (focus, rest): (Vec<&PitchRecord>, Vec<&PitchRecord>) = subset
        .iter()
        .partition(|r| r.pitcher_name == pitcher_name);

    let focus_means: BTreeMap<Metric, f64> = Metric::ALL
        .iter()
        .map(|&m| (m, metric_mean(&focus, m)))
        .collect();
    let rest_of_league_means: BTreeMap<Metric, f64> = Metric::ALL
        .iter()
        .map(|&m| (m, metric_mean(&rest, m)))
        .collect();

    Ok(CompareData {
        pitcher_name: pitcher_name.to_string(),
        focus_means,
        rest_of_league_means,
        percentiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountAdvantage, Stand};

    fn record(pitcher: &str, strike_ind: f64, woba: Option<f64>) -> PitchRecord {
        PitchRecord {
            pitcher_name: pitcher.to_string(),
            batter_name: "Machado".to_string(),
            pitch_name: "Fastball".to_string(),
            stand: Stand::Right,
            count: "0-0".to_string(),
            count_advantage: CountAdvantage::Even,
            outs_when_up: 0,
            inning: 1,
            runners_on_base: "Empty".to_string(),
            run_differential: 0,
            tto: 1,
            strike_ind,
            whiff_ind: 0.0,
            woba_value: woba,
            launch_speed: None,
            release_spin_rate: None,
            events: None,
            batted_ball_type: None,
        }
    }

    #[test]
    fn test_fractional_rank_pct() {
        let pcts = fractional_rank_pct(&[0.3, 0.1, 0.2]);
        assert!((pcts[0] - 100.0).abs() < 1e-9);
        assert!((pcts[1] - 100.0 / 3.0).abs() < 1e-9);
        assert!((pcts[2] - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_rank_pct_ties_share_average_rank() {
        // Two tied low values share ranks 1 and 2 -> average 1.5.
        let pcts = fractional_rank_pct(&[0.1, 0.1, 0.5]);
        assert!((pcts[0] - 50.0).abs() < 1e-9);
        assert!((pcts[1] - 50.0).abs() < 1e-9);
        assert!((pcts[2] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_rank_pct_excludes_nan() {
        let pcts = fractional_rank_pct(&[0.2, f64::NAN, 0.4]);
        assert!((pcts[0] - 50.0).abs() < 1e-9);
        assert!(pcts[1].is_nan());
        assert!((pcts[2] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_lowest_woba_gets_highest_inverted_percentile() {
        let records = vec![
            record("A", 1.0, Some(0.250)),
            record("B", 1.0, Some(0.300)),
            record("C", 1.0, Some(0.350)),
        ];

        let summary = league_pitcher_summary(&records).unwrap();
        let ranks = percentile_ranks(&summary);

        let pct_of = |name: &str| {
            ranks
                .iter()
                .find(|p| p.pitcher_name == name)
                .unwrap()
                .percentiles[&Metric::WobaValue]
        };

        assert!(pct_of("A") > pct_of("B"));
        assert!(pct_of("B") > pct_of("C"));
    }

    #[test]
    fn test_maximum_mean_ranks_at_one_hundred() {
        let records = vec![
            record("A", 0.0, None),
            record("B", 0.5, None),
            record("C", 1.0, None),
        ];

        let summary = league_pitcher_summary(&records).unwrap();
        let ranks = percentile_ranks(&summary);

        let best = ranks.iter().find(|p| p.pitcher_name == "C").unwrap();
        assert!((best.percentiles[&Metric::StrikeInd] - 100.0).abs() < 1e-9);

        let worst = ranks.iter().find(|p| p.pitcher_name == "A").unwrap();
        let smallest = ranks
            .iter()
            .map(|p| p.percentiles[&Metric::StrikeInd])
            .fold(f64::INFINITY, f64::min);
        assert!((worst.percentiles[&Metric::StrikeInd] - smallest).abs() < 1e-9);
    }

    #[test]
    fn test_compare_pitcher_splits_focus_and_rest() {
        let records = vec![
            record("A", 1.0, Some(0.2)),
            record("A", 1.0, Some(0.3)),
            record("B", 0.0, Some(0.4)),
        ];

        let data = compare_pitcher(&records, "A").unwrap();
        assert!((data.focus_means[&Metric::StrikeInd] - 1.0).abs() < 1e-9);
        assert!((data.focus_means[&Metric::WobaValue] - 0.25).abs() < 1e-9);
        assert!((data.rest_of_league_means[&Metric::StrikeInd]).abs() < 1e-9);
        assert!((data.rest_of_league_means[&Metric::WobaValue] - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_compare_pitcher_unknown_focus_is_tolerated() {
        let records = vec![record("A", 1.0, None)];

        let data = compare_pitcher(&records, "Nobody").unwrap();
        assert!(data.focus_means[&Metric::StrikeInd].is_nan());
        assert!(data.percentiles[&Metric::StrikeInd].is_nan());
        assert!((data.rest_of_league_means[&Metric::StrikeInd] - 1.0).abs() < 1e-9);
    }
}
