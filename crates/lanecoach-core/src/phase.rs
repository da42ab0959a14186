//! Coarse temporal bucketing of match progress.

use serde::{Deserialize, Serialize};

/// Elapsed time at which the early game ends, in seconds (15 minutes).
pub const EARLY_END_SECS: u32 = 900;

/// Elapsed time at which the mid game ends, in seconds (30 minutes).
pub const MID_END_SECS: u32 = 1800;

/// Coarse game phase derived from elapsed time.
///
/// Phases are contiguous, non-overlapping, and monotone in elapsed time:
/// early, then mid, then late, with no reversals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Laning phase, before [`EARLY_END_SECS`].
    #[display("early")]
    Early,
    /// Mid game, before [`MID_END_SECS`].
    #[display("mid")]
    Mid,
    /// Late game, everything after.
    #[display("late")]
    Late,
}

impl GamePhase {
    /// Classifies an elapsed-time value into a game phase.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanecoach_core::phase::GamePhase;
    ///
    /// assert_eq!(GamePhase::from_elapsed(0), GamePhase::Early);
    /// assert_eq!(GamePhase::from_elapsed(900), GamePhase::Mid);
    /// assert_eq!(GamePhase::from_elapsed(1800), GamePhase::Late);
    /// ```
    #[must_use]
    pub const fn from_elapsed(elapsed_secs: u32) -> Self {
        if elapsed_secs < EARLY_END_SECS {
            Self::Early
        } else if elapsed_secs < MID_END_SECS {
            Self::Mid
        } else {
            Self::Late
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exclusive_on_the_left() {
        assert_eq!(GamePhase::from_elapsed(EARLY_END_SECS - 1), GamePhase::Early);
        assert_eq!(GamePhase::from_elapsed(EARLY_END_SECS), GamePhase::Mid);
        assert_eq!(GamePhase::from_elapsed(MID_END_SECS - 1), GamePhase::Mid);
        assert_eq!(GamePhase::from_elapsed(MID_END_SECS), GamePhase::Late);
    }

    #[test]
    fn phase_is_monotone_in_elapsed_time() {
        let mut prev = GamePhase::from_elapsed(0);
        for t in (0..7200).step_by(30) {
            let phase = GamePhase::from_elapsed(t);
            assert!(phase >= prev, "phase regressed at t={t}");
            prev = phase;
        }
    }
}
