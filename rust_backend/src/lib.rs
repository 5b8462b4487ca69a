//! Statcast Rust Backend - Pitch-by-pitch analytics for dashboard rendering.
//!
//! The crate is the compute core behind a pitching dashboard: an external
//! loader produces [`models::PitchRecord`]s, this crate filters them to the
//! dashboard scope and reduces them to summary tables, and an external
//! renderer turns those tables into charts. No I/O happens here.

pub mod error;
pub mod models;
pub mod services;
pub mod transformations;

pub use error::{AnalyticsError, AnalyticsResult};
