//! Retrospective analysis of recorded match timelines.
//!
//! This crate mines an ordered sequence of [`Frame`](lanecoach_core::Frame)s
//! for behavioral patterns:
//!
//! - [`roaming`] - Detects discrete cross-zone movements sustained over a
//!   dwell window, per actor.
//! - [`positioning`] - Scores per-frame positional safety from inter-actor
//!   distances, aggregated per game phase.
//! - [`farming`] - Computes resource-accumulation rate and efficiency
//!   against an ideal baseline.
//! - [`objectives`] - Buckets objective-kill timestamps by kind from the
//!   embedded event stream.
//! - [`report`] - The one-call [`analyze_timeline`](report::analyze_timeline)
//!   entry combining all four.
//!
//! # Input contract
//!
//! Frames must be supplied in non-decreasing timestamp order; the
//! analyzers assume the ordering and do not validate it. Team membership
//! comes from a caller-supplied [`TeamRoster`](lanecoach_core::TeamRoster);
//! unrostered participants are skipped by team-sensitive analyses.
//!
//! All analyses are pure functions over the frame slice: re-running any of
//! them on identical input yields identical output.

pub use self::report::{ReplayReport, analyze_timeline};

pub mod farming;
pub mod objectives;
pub mod positioning;
pub mod report;
pub mod roaming;
