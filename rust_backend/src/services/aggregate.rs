//! Grouped summary statistics over a filtered record subset.

use std::collections::BTreeMap;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{GroupKey, Metric, PitchRecord, SummaryRow};

/// Mean over the measured metric values in a group; NaN when none are present.
pub(crate) fn metric_mean(records: &[&PitchRecord], metric: Metric) -> f64 {
    let values: Vec<f64> = records.iter().filter_map(|r| metric.value(r)).collect();
    if values.is_empty() {
        f64::NAN
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Group `subset` by one or two keys and summarize each group.
///
/// Records where a requested key has no value (e.g. `events` on a
/// non-terminal pitch) are skipped and do not enter any denominator.
/// Frequencies are normalized globally for a single key; for two keys they
/// are normalized within the outer (first) key, so the inner mix of each
/// outer group sums to 1.0 on its own.
///
/// Output rows come back in lexical group-key order. An empty subset yields
/// an empty result.
pub fn aggregate(
    subset: &[PitchRecord],
    keys: &[GroupKey],
    metrics: &[Metric],
) -> AnalyticsResult<Vec<SummaryRow>> {
    if keys.is_empty() || keys.len() > 2 {
        return Err(AnalyticsError::InvalidGroupKey(format!(
            "Expected one or two group keys, got {}",
            keys.len()
        )));
    }

    // BTreeMap keeps the output deterministic: lexical key order.
    let mut groups: BTreeMap<Vec<String>, Vec<&PitchRecord>> = BTreeMap::new();
    for record in subset {
        let mut key = Vec::with_capacity(keys.len());
        let mut complete = true;
        for group_key in keys {
            match group_key.value_of(record) {
                Some(value) => key.push(value),
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            groups.entry(key).or_default().push(record);
        }
    }

    let grouped_total: usize = groups.values().map(|g| g.len()).sum();

    // Per-outer-key totals, only needed for the nested normalization.
    let mut outer_totals: BTreeMap<&str, usize> = BTreeMap::new();
    if keys.len() == 2 {
        for (key, records) in &groups {
            *outer_totals.entry(key[0].as_str()).or_insert(0) += records.len();
        }
    }

    let mut rows = Vec::with_capacity(groups.len());
    for (key, records) in &groups {
        let denominator = if keys.len() == 2 {
            outer_totals[key[0].as_str()]
        } else {
            grouped_total
        };
        let frequency = if denominator > 0 {
            records.len() as f64 / denominator as f64
        } else {
            0.0
        };

        let means: BTreeMap<Metric, f64> = metrics
            .iter()
            .map(|&metric| (metric, metric_mean(records, metric)))
            .collect();

        rows.push(SummaryRow {
            keys: key.clone(),
            count: records.len(),
            frequency,
            means,
        });
    }

    log::debug!(
        "aggregated {} records into {} groups by {:?}",
        grouped_total,
        rows.len(),
        keys
    );

    Ok(rows)
}
