//! Positional-danger evaluation: visible enemies against nearby allies.
//!
//! Danger level is `visible_enemies − nearby_allies`, where an ally counts
//! as nearby inside the configured radius (Euclidean). A level at or above
//! the retreat threshold makes retreat mandatory and short-circuits the
//! action cascade.

use lanecoach_core::Snapshot;
use serde::Serialize;

use crate::thresholds::DangerThresholds;

/// Positional-danger judgment for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DangerJudgment {
    /// Number of opposing champions currently visible.
    pub visible_enemies: usize,
    /// Number of allies within the configured radius of the player.
    pub nearby_allies: usize,
    /// `visible_enemies − nearby_allies`.
    pub danger_level: i32,
    /// Negative danger level: allies outnumber visible threats.
    pub is_safe: bool,
    /// Retreat is mandatory (danger at or above the retreat threshold).
    pub must_retreat: bool,
    /// Positioning recommendation.
    pub recommendation: &'static str,
}

/// Evaluates positional danger for a snapshot.
#[must_use]
pub fn evaluate(snapshot: &Snapshot, thresholds: &DangerThresholds) -> DangerJudgment {
    let visible_enemies = snapshot.enemies.iter().filter(|e| e.visible).count();
    let nearby_allies = snapshot
        .allies
        .iter()
        .filter(|a| snapshot.player.position.distance_to(&a.position) <= thresholds.ally_radius)
        .count();

    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let danger_level = visible_enemies as i32 - nearby_allies as i32;

    let recommendation = if danger_level >= thresholds.retreat_level {
        "Danger - too many enemies around, retreat"
    } else if danger_level == thresholds.caution_level {
        "Caution - do not fight without ally support"
    } else if danger_level == 0 {
        "Even situation around you"
    } else {
        "Safe - aggressive play is possible"
    };

    DangerJudgment {
        visible_enemies,
        nearby_allies,
        danger_level,
        is_safe: danger_level < 0,
        must_retreat: danger_level >= thresholds.retreat_level,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use lanecoach_core::{AllyState, EnemyState, MapPosition, PlayerState};

    use super::*;

    fn snapshot(visible_enemies: usize, allies_at: &[f32]) -> Snapshot {
        Snapshot {
            player: PlayerState {
                position: MapPosition::new(0.0, 0.0),
                ..PlayerState::default()
            },
            allies: allies_at
                .iter()
                .map(|&x| AllyState {
                    position: MapPosition::new(x, 0.0),
                })
                .collect(),
            enemies: (0..visible_enemies)
                .map(|_| EnemyState {
                    position: MapPosition::default(),
                    visible: true,
                })
                .collect(),
            ..Snapshot::default()
        }
    }

    #[test]
    fn retreat_at_two_or_more() {
        let judgment = evaluate(&snapshot(2, &[]), &DangerThresholds::default());
        assert_eq!(judgment.danger_level, 2);
        assert!(judgment.must_retreat);
        assert!(!judgment.is_safe);
    }

    #[test]
    fn allies_outside_radius_do_not_count() {
        let judgment = evaluate(&snapshot(1, &[3500.0]), &DangerThresholds::default());
        assert_eq!(judgment.nearby_allies, 0);
        assert_eq!(judgment.danger_level, 1);
        assert_eq!(
            judgment.recommendation,
            "Caution - do not fight without ally support"
        );
    }

    #[test]
    fn ally_at_exact_radius_counts() {
        let judgment = evaluate(&snapshot(1, &[3000.0]), &DangerThresholds::default());
        assert_eq!(judgment.nearby_allies, 1);
        assert_eq!(judgment.danger_level, 0);
    }

    #[test]
    fn ally_advantage_is_safe() {
        let judgment = evaluate(&snapshot(0, &[100.0, 200.0]), &DangerThresholds::default());
        assert_eq!(judgment.danger_level, -2);
        assert!(judgment.is_safe);
        assert_eq!(judgment.recommendation, "Safe - aggressive play is possible");
    }

    #[test]
    fn invisible_enemies_are_ignored() {
        let mut snapshot = snapshot(0, &[]);
        snapshot.enemies.push(EnemyState {
            position: MapPosition::default(),
            visible: false,
        });
        let judgment = evaluate(&snapshot, &DangerThresholds::default());
        assert_eq!(judgment.visible_enemies, 0);
        assert_eq!(judgment.danger_level, 0);
    }
}
