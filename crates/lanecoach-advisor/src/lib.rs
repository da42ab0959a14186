//! Advisory engine: scoring live-match snapshots and composing actions.
//!
//! This crate implements a two-level advisory architecture:
//!
//! 1. **Snapshot Evaluation** ([`wave`], [`danger`], [`power`],
//!    [`objective`], [`vision`]) - Five independent, pure evaluators, each
//!    consuming a single [`Snapshot`](lanecoach_core::Snapshot) and
//!    producing a structured judgment with one human-readable
//!    recommendation.
//!
//! 2. **Action Composition** ([`composer`]) - Merges the five judgments
//!    plus the current game phase into an ordered, capped list of
//!    [`RecommendedAction`](composer::RecommendedAction)s via a fixed-
//!    precedence rule cascade.
//!
//! # Architecture
//!
//! ```text
//! GameAdvisor::advise (orchestration)
//!     ↓ runs
//! Snapshot Evaluators (five independent judgments)
//!     ↓ feed
//! Action Composer (rule cascade, ≤3 prioritized actions)
//! ```
//!
//! # Design Principles
//!
//! ## Explicit threshold tables
//!
//! Every tuning constant lives in a named struct in [`thresholds`] and is
//! injected into the evaluator that uses it. The logic never embeds a
//! magic number, so tunings can be swapped or unit-tested in isolation.
//!
//! ## Cascade, not weighted sum
//!
//! Action selection is an early-exit rule cascade with a fixed precedence
//! order, not a weighted score blend. The order of rules - and of actions
//! inserted at equal priority - is part of the output contract; see
//! [`composer`] for the exact sequence.
//!
//! ## Total functions
//!
//! All evaluators are pure and total: any structurally valid snapshot
//! produces a judgment, with documented defaults substituted for missing
//! or degenerate fields (zero elapsed time, zero max health). No error
//! propagates out of an evaluator.
//!
//! # Example
//!
//! ```
//! use lanecoach_advisor::GameAdvisor;
//! use lanecoach_core::Snapshot;
//!
//! let advisor = GameAdvisor::default();
//! let snapshot = Snapshot {
//!     elapsed_secs: 360,
//!     ..Snapshot::default()
//! };
//!
//! let advisory = advisor.advise(&snapshot);
//! assert!(advisory.actions.len() <= 3);
//! ```

pub use self::advisor::{Advisory, GameAdvisor};
pub use self::composer::{ActionKind, MAX_ACTIONS, RecommendedAction};
pub use self::thresholds::AdvisorConfig;

pub mod advisor;
pub mod composer;
pub mod danger;
pub mod objective;
pub mod power;
pub mod roam;
pub mod thresholds;
pub mod vision;
pub mod wave;
