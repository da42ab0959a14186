//! Wave-state evaluation: creep-score pace against the ideal baseline.
//!
//! The ideal creep score is `ideal_cs_per_min × elapsed_minutes` (floor
//! minutes); the judgment is driven entirely by the deficit
//! `ideal − actual`. At zero elapsed minutes the baseline is zero, so no
//! rate is ever computed against zero time.

use lanecoach_core::Snapshot;
use serde::Serialize;

use crate::thresholds::WaveThresholds;

/// Wave-state judgment for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveJudgment {
    /// Ideal creep score for the elapsed time.
    pub ideal_cs: f32,
    /// `ideal_cs − actual_cs`; positive means behind.
    pub cs_deficit: f32,
    /// The player is ahead on CS and should push (deficit below the
    /// push surplus band).
    pub should_push: bool,
    /// The player is behind on CS and should freeze (deficit above the
    /// freeze band).
    pub should_freeze: bool,
    /// Wave-management recommendation.
    pub recommendation: &'static str,
}

/// Evaluates creep-score pace for a snapshot.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn evaluate(snapshot: &Snapshot, thresholds: &WaveThresholds) -> WaveJudgment {
    let ideal_cs = thresholds.ideal_cs_per_min * snapshot.elapsed_minutes() as f32;
    let cs_deficit = ideal_cs - snapshot.player.cs as f32;

    let recommendation = if cs_deficit > thresholds.farm_deficit {
        "CS is behind the pace - focus on farming"
    } else if cs_deficit > thresholds.freeze_deficit {
        "Freeze the wave and catch up on CS safely"
    } else if cs_deficit < thresholds.push_surplus {
        "CS lead - push the wave and consider roaming"
    } else {
        "Wave management is on track"
    };

    WaveJudgment {
        ideal_cs,
        cs_deficit,
        should_push: cs_deficit < thresholds.push_surplus,
        should_freeze: cs_deficit > thresholds.freeze_deficit,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use lanecoach_core::PlayerState;

    use super::*;

    fn snapshot(elapsed_secs: u32, cs: u32) -> Snapshot {
        Snapshot {
            elapsed_secs,
            player: PlayerState {
                cs,
                ..PlayerState::default()
            },
            ..Snapshot::default()
        }
    }

    #[test]
    fn worked_example_from_contract() {
        // elapsed=360s, cs=40: ideal=60, deficit=20 -> farm band.
        let judgment = evaluate(&snapshot(360, 40), &WaveThresholds::default());
        assert_eq!(judgment.ideal_cs, 60.0);
        assert_eq!(judgment.cs_deficit, 20.0);
        assert!(!judgment.should_push);
        assert!(judgment.should_freeze);
        assert_eq!(
            judgment.recommendation,
            "CS is behind the pace - focus on farming"
        );
    }

    #[test]
    fn freeze_band_between_ten_and_fifteen() {
        // ideal=60, cs=48 -> deficit=12.
        let judgment = evaluate(&snapshot(360, 48), &WaveThresholds::default());
        assert!(judgment.should_freeze);
        assert_eq!(
            judgment.recommendation,
            "Freeze the wave and catch up on CS safely"
        );
    }

    #[test]
    fn surplus_recommends_pushing() {
        // ideal=60, cs=75 -> deficit=-15.
        let judgment = evaluate(&snapshot(360, 75), &WaveThresholds::default());
        assert!(judgment.should_push);
        assert!(!judgment.should_freeze);
        assert_eq!(
            judgment.recommendation,
            "CS lead - push the wave and consider roaming"
        );
    }

    #[test]
    fn zero_elapsed_time_has_zero_baseline() {
        let judgment = evaluate(&snapshot(0, 0), &WaveThresholds::default());
        assert_eq!(judgment.ideal_cs, 0.0);
        assert_eq!(judgment.cs_deficit, 0.0);
        assert_eq!(judgment.recommendation, "Wave management is on track");
    }

    #[test]
    fn partial_minutes_floor() {
        // 419s floors to 6 minutes: ideal stays 60.
        let judgment = evaluate(&snapshot(419, 60), &WaveThresholds::default());
        assert_eq!(judgment.ideal_cs, 60.0);
        assert_eq!(judgment.cs_deficit, 0.0);
    }
}
