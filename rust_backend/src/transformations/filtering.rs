use std::collections::BTreeSet;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{CountAdvantage, PitchRecord, Stand};

/// Immutable predicate bundle applied to a pitch record collection.
///
/// Every predicate left unset keeps all records. `pitcher_name` and
/// `batter_name` are exact matches; the remaining categorical fields are set
/// memberships; `run_differential` is an inclusive range. The predicates are
/// ANDed, so a record survives only when every configured predicate holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pitcher_name: Option<String>,
    batter_name: Option<String>,
    pitch_names: Option<BTreeSet<String>>,
    stands: Option<BTreeSet<Stand>>,
    counts: Option<BTreeSet<String>>,
    count_advantages: Option<BTreeSet<CountAdvantage>>,
    outs_when_up: Option<BTreeSet<u8>>,
    innings: Option<BTreeSet<u8>>,
    runners_on_base: Option<BTreeSet<String>>,
    run_differential: Option<(i32, i32)>,
}

impl FilterSpec {
    pub fn builder() -> FilterSpecBuilder {
        FilterSpecBuilder::default()
    }

    /// League-wide variant of this spec: identical predicates with the
    /// pitcher match omitted. Used when one pitcher must be ranked against
    /// the whole league under the same scope.
    pub fn without_pitcher(&self) -> FilterSpec {
        let mut spec = self.clone();
        spec.pitcher_name = None;
        spec
    }

    pub fn pitcher_name(&self) -> Option<&str> {
        self.pitcher_name.as_deref()
    }

    /// True when `record` satisfies every configured predicate.
    ///
    /// Exact matches run before set memberships, the numeric range last, so
    /// the chain short-circuits on the cheapest checks first.
    pub fn matches(&self, record: &PitchRecord) -> bool {
        if let Some(name) = &self.pitcher_name {
            if record.pitcher_name != *name {
                return false;
            }
        }
        if let Some(name) = &self.batter_name {
            if record.batter_name != *name {
                return false;
            }
        }
        if let Some(names) = &self.pitch_names {
            if !names.contains(&record.pitch_name) {
                return false;
            }
        }
        if let Some(stands) = &self.stands {
            if !stands.contains(&record.stand) {
                return false;
            }
        }
        if let Some(counts) = &self.counts {
            if !counts.contains(&record.count) {
                return false;
            }
        }
        if let Some(advantages) = &self.count_advantages {
            if !advantages.contains(&record.count_advantage) {
                return false;
            }
        }
        if let Some(outs) = &self.outs_when_up {
            if !outs.contains(&record.outs_when_up) {
                return false;
            }
        }
        if let Some(innings) = &self.innings {
            if !innings.contains(&record.inning) {
                return false;
            }
        }
        if let Some(runners) = &self.runners_on_base {
            if !runners.contains(&record.runners_on_base) {
                return false;
            }
        }
        if let Some((lo, hi)) = self.run_differential {
            if record.run_differential < lo || record.run_differential > hi {
                return false;
            }
        }
        true
    }
}

/// Builder for [`FilterSpec`]. Validation happens in [`build`](Self::build),
/// so a malformed configuration fails before any record is touched.
#[derive(Debug, Clone, Default)]
pub struct FilterSpecBuilder {
    pitcher_name: Option<String>,
    batter_name: Option<String>,
    pitch_names: Option<BTreeSet<String>>,
    stands: Option<BTreeSet<Stand>>,
    counts: Option<BTreeSet<String>>,
    count_advantages: Option<BTreeSet<CountAdvantage>>,
    outs_when_up: Option<BTreeSet<u8>>,
    innings: Option<BTreeSet<u8>>,
    runners_on_base: Option<BTreeSet<String>>,
    run_differential: Option<(i32, i32)>,
}

impl FilterSpecBuilder {
    pub fn pitcher_name(mut self, name: impl Into<String>) -> Self {
        self.pitcher_name = Some(name.into());
        self
    }

    pub fn batter_name(mut self, name: impl Into<String>) -> Self {
        self.batter_name = Some(name.into());
        self
    }

    pub fn pitch_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pitch_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn stands(mut self, stands: impl IntoIterator<Item = Stand>) -> Self {
        self.stands = Some(stands.into_iter().collect());
        self
    }

    pub fn counts<I, S>(mut self, counts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.counts = Some(counts.into_iter().map(Into::into).collect());
        self
    }

    pub fn count_advantages(
        mut self,
        advantages: impl IntoIterator<Item = CountAdvantage>,
    ) -> Self {
        self.count_advantages = Some(advantages.into_iter().collect());
        self
    }

    pub fn outs_when_up(mut self, outs: impl IntoIterator<Item = u8>) -> Self {
        self.outs_when_up = Some(outs.into_iter().collect());
        self
    }

    pub fn innings(mut self, innings: impl IntoIterator<Item = u8>) -> Self {
        self.innings = Some(innings.into_iter().collect());
        self
    }

    pub fn runners_on_base<I, S>(mut self, runners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runners_on_base = Some(runners.into_iter().map(Into::into).collect());
        self
    }

    /// Inclusive run-differential range `[lo, hi]`.
    pub fn run_differential(mut self, lo: i32, hi: i32) -> Self {
        self.run_differential = Some((lo, hi));
        self
    }

    pub fn build(self) -> AnalyticsResult<FilterSpec> {
        if let Some((lo, hi)) = self.run_differential {
            if lo > hi {
                return Err(AnalyticsError::InvalidFilterSpec(format!(
                    "run differential range is inverted: [{}, {}]",
                    lo, hi
                )));
            }
        }

        Ok(FilterSpec {
            pitcher_name: self.pitcher_name,
            batter_name: self.batter_name,
            pitch_names: self.pitch_names,
            stands: self.stands,
            counts: self.counts,
            count_advantages: self.count_advantages,
            outs_when_up: self.outs_when_up,
            innings: self.innings,
            runners_on_base: self.runners_on_base,
            run_differential: self.run_differential,
        })
    }
}

/// Filter `records` down to the rows matching `spec`, preserving their
/// original relative order. An empty result is a normal outcome.
pub fn filter_records(records: &[PitchRecord], spec: &FilterSpec) -> Vec<PitchRecord> {
    let filtered: Vec<PitchRecord> = records
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect();

    log::debug!(
        "filter kept {} of {} pitch records",
        filtered.len(),
        records.len()
    );

    filtered
}
