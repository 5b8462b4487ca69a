//! Domain models shared by the filter and the summary services.
//!
//! [`pitch`] holds the per-event record as produced by the external loader;
//! [`summary`] holds the grouping vocabulary and the rows handed to the
//! external renderer.

pub mod pitch;
pub mod summary;

pub use pitch::{CountAdvantage, PitchRecord, Stand};
pub use summary::{BreakdownBy, GroupKey, Metric, SummaryRow};
