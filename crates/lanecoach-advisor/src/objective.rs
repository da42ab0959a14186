//! Objective-timing evaluation: which neutral objectives deserve attention.
//!
//! Inspects the availability flags and the elapsed time, emitting zero or
//! more prioritized entries:
//!
//! - **Dragon** - alive, unlocked, and within the window after each
//!   respawn-period tick (`elapsed % period < window`).
//! - **Herald** - alive and inside its fixed availability window.
//! - **Baron** - alive once unlocked.
//!
//! Entries are sorted by descending priority; the highest becomes
//! `next_objective`.

use lanecoach_core::{MonsterKind, Snapshot};
use serde::Serialize;

use crate::thresholds::ObjectiveTimings;

/// How soon an objective entry is actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveTiming {
    /// The window is open right now.
    #[display("now")]
    Now,
    /// Available in the near future window.
    #[display("soon")]
    Soon,
    /// Unlocked and standing, no specific window.
    #[display("available")]
    Available,
}

/// One prioritized objective entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectivePriority {
    /// Which objective.
    pub objective: MonsterKind,
    /// Priority on the shared 0-10 action scale.
    pub priority: u8,
    /// How soon the entry is actionable.
    pub timing: ObjectiveTiming,
    /// Objective recommendation.
    pub recommendation: &'static str,
}

/// Objective-timing judgment for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectiveJudgment {
    /// All current entries, sorted by descending priority.
    pub priorities: Vec<ObjectivePriority>,
    /// The highest-priority entry, if any.
    pub next_objective: Option<ObjectivePriority>,
}

/// Evaluates objective timing for a snapshot.
#[must_use]
pub fn evaluate(snapshot: &Snapshot, timings: &ObjectiveTimings) -> ObjectiveJudgment {
    let elapsed = snapshot.elapsed_secs;
    let objectives = &snapshot.objectives;
    let mut priorities = Vec::new();

    if objectives.dragon_alive
        && elapsed >= timings.dragon_unlock_secs
        && elapsed % timings.dragon_period_secs < timings.dragon_window_secs
    {
        priorities.push(ObjectivePriority {
            objective: MonsterKind::Dragon,
            priority: timings.dragon_priority,
            timing: ObjectiveTiming::Now,
            recommendation: "Dragon window - group toward the bottom side",
        });
    }

    let (herald_open, herald_close) = timings.herald_window_secs;
    if objectives.herald_alive && (herald_open..=herald_close).contains(&elapsed) {
        priorities.push(ObjectivePriority {
            objective: MonsterKind::Herald,
            priority: timings.herald_priority,
            timing: ObjectiveTiming::Soon,
            recommendation: "Take the herald to break open a lane",
        });
    }

    if objectives.baron_alive && elapsed >= timings.baron_unlock_secs {
        priorities.push(ObjectivePriority {
            objective: MonsterKind::Baron,
            priority: timings.baron_priority,
            timing: ObjectiveTiming::Available,
            recommendation: "Baron is up - secure vision around the pit",
        });
    }

    priorities.sort_by(|a, b| b.priority.cmp(&a.priority));
    let next_objective = priorities.first().copied();

    ObjectiveJudgment {
        priorities,
        next_objective,
    }
}
