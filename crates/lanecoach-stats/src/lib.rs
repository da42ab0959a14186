//! Descriptive statistics for replay aggregation.
//!
//! This crate provides the small statistical summaries embedded in replay
//! analysis reports: per-phase positioning safety distributions and
//! farming-rate distributions are both reported as [`DescriptiveStats`]
//! rather than bare means, so downstream consumers can see spread as well
//! as central tendency.
//!
//! The crate is intentionally dependency-light (serde only, for report
//! embedding) and contains no domain knowledge: inputs are plain `f32`
//! series produced by the analyzers.

pub use self::descriptive::DescriptiveStats;

pub mod descriptive;
