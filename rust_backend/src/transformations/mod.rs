//! Record filtering for the dashboard scope.
//!
//! Every visualization shares one filter pass: an immutable [`FilterSpec`]
//! built once per request, applied as an ANDed chain of per-field predicates.
//!
//! # Example
//!
//! ```
//! use statcast_rust::transformations::FilterSpec;
//!
//! let spec = FilterSpec::builder()
//!     .pitcher_name("Walker Buehler")
//!     .pitch_names(["4-Seam Fastball", "Slider"])
//!     .run_differential(-2, 2)
//!     .build()
//!     .unwrap();
//!
//! // League-wide variant for percentile ranking: same predicates, no pitcher.
//! let league_spec = spec.without_pitcher();
//! # let _ = league_spec;
//! ```

pub mod filtering;

pub use filtering::{filter_records, FilterSpec, FilterSpecBuilder};
