//! Roam-timing hints from lightweight lane context.
//!
//! A smaller advisory surface than the full snapshot pipeline: callers
//! that track only their own lane state (level, wave trend, the enemy's
//! escape summoner ability) can still ask whether now is a roam window.
//! Fields the caller cannot observe stay `None` and simply produce no
//! hint, never a guess.

use serde::{Deserialize, Serialize};

/// Champion level at which the ultimate ability unlocks.
pub const ULTIMATE_LEVEL: u32 = 6;

/// First-dragon roam window, inclusive, in seconds.
pub const FIRST_DRAGON_WINDOW_SECS: (u32, u32) = (360, 420);

/// Direction the lane wave is trending.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum WaveTrend {
    /// Wave is pushing toward the enemy tower.
    #[display("push")]
    Push,
    /// Wave is frozen near the own tower.
    #[display("freeze")]
    Freeze,
    /// Wave is slow-pushing.
    #[display("slow_push")]
    SlowPush,
    /// Wave state not tracked.
    #[default]
    #[display("unknown")]
    Unknown,
}

/// Lane context for roam-hint generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoamContext {
    /// The player's champion level.
    pub level: u32,
    /// Current wave trend.
    pub wave_state: WaveTrend,
    /// Whether the lane opponent's escape summoner ability is up.
    /// `None` when not tracked; no hint is produced either way.
    pub enemy_flash_available: Option<bool>,
    /// Elapsed game time, in seconds.
    pub elapsed_secs: u32,
}

/// Produces roam-timing hints for the given lane context.
///
/// Hints are independent; zero or more may apply.
///
/// # Examples
///
/// ```
/// use lanecoach_advisor::roam::{RoamContext, WaveTrend, roam_hints};
///
/// let context = RoamContext {
///     level: 6,
///     wave_state: WaveTrend::Push,
///     enemy_flash_available: Some(false),
///     elapsed_secs: 380,
/// };
/// assert_eq!(roam_hints(&context).len(), 4);
/// ```
#[must_use]
pub fn roam_hints(context: &RoamContext) -> Vec<&'static str> {
    let mut hints = Vec::new();

    if context.level >= ULTIMATE_LEVEL {
        hints.push("Ultimate unlocked - roam windows open up");
    }

    match context.wave_state {
        WaveTrend::Push => hints.push("Wave is pushed - good moment to roam"),
        WaveTrend::Freeze => hints.push("Wave is frozen - stay and farm instead of roaming"),
        WaveTrend::SlowPush | WaveTrend::Unknown => {}
    }

    if context.enemy_flash_available == Some(false) {
        hints.push("Enemy escape ability is down - gank windows are strong");
    }

    let (open, close) = FIRST_DRAGON_WINDOW_SECS;
    if (open..=close).contains(&context.elapsed_secs) {
        hints.push("First dragon window - consider roaming bottom");
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_yields_no_hints() {
        assert!(roam_hints(&RoamContext::default()).is_empty());
    }

    #[test]
    fn frozen_wave_discourages_roaming() {
        let context = RoamContext {
            wave_state: WaveTrend::Freeze,
            ..RoamContext::default()
        };
        let hints = roam_hints(&context);
        assert_eq!(
            hints,
            vec!["Wave is frozen - stay and farm instead of roaming"]
        );
    }

    #[test]
    fn untracked_flash_produces_no_hint() {
        let up = RoamContext {
            enemy_flash_available: Some(true),
            ..RoamContext::default()
        };
        let untracked = RoamContext::default();
        assert!(roam_hints(&up).is_empty());
        assert!(roam_hints(&untracked).is_empty());
    }

    #[test]
    fn dragon_window_bounds_are_inclusive() {
        for secs in [360, 420] {
            let context = RoamContext {
                elapsed_secs: secs,
                ..RoamContext::default()
            };
            assert_eq!(roam_hints(&context).len(), 1);
        }
        let outside = RoamContext {
            elapsed_secs: 421,
            ..RoamContext::default()
        };
        assert!(roam_hints(&outside).is_empty());
    }
}
