//! Shared data model and leaf classifiers for the LaneCoach analysis engine.
//!
//! This crate defines the plain, caller-owned value types that both the
//! advisory and replay subsystems consume:
//!
//! - [`map`] - Map geometry: the symbolic [`Zone`](map::Zone) enum and the
//!   ordered rectangle table behind [`classify_zone`](map::classify_zone).
//! - [`phase`] - The coarse [`GamePhase`](phase::GamePhase) bucketing of
//!   elapsed game time.
//! - [`snapshot`] - The [`Snapshot`](snapshot::Snapshot) record describing
//!   one instant of a live match, input to the snapshot evaluators.
//! - [`timeline`] - The [`Frame`](timeline::Frame) record describing one
//!   slice of a recorded match timeline, input to the replay analyzers,
//!   plus the caller-supplied [`TeamRoster`](timeline::TeamRoster).
//!
//! Everything here is an immutable value: the analysis crates never mutate
//! or persist these types, and all derived facts (judgments, events,
//! reports) are produced as fresh values.

pub use self::{map::*, phase::*, snapshot::*, timeline::*};

pub mod map;
pub mod phase;
pub mod snapshot;
pub mod timeline;
