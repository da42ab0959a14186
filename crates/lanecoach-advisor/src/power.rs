//! Power-level evaluation: the lane matchup as a single weighted score.
//!
//! ```text
//! power = level_diff × level_weight
//!       + item_advantage × item_weight
//!       + health_fraction_advantage × health_weight
//! ```
//!
//! Bands over the score map to all-in / trade / balanced / cautious /
//! critical recommendations, and the `can_trade` / `can_all_in` flags feed
//! the action cascade.

use lanecoach_core::Snapshot;
use serde::Serialize;

use crate::thresholds::PowerWeights;

/// Power-level judgment for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerJudgment {
    /// Player level minus lane-opponent level.
    pub level_diff: i32,
    /// Player item count minus lane-opponent item count.
    pub item_advantage: i32,
    /// Player health fraction minus lane-opponent health fraction.
    pub health_advantage: f32,
    /// The combined weighted score.
    pub power_score: f32,
    /// The score clears the trade band.
    pub can_trade: bool,
    /// The score clears the all-in band.
    pub can_all_in: bool,
    /// Matchup recommendation.
    pub recommendation: &'static str,
}

/// Evaluates the lane power matchup for a snapshot.
#[expect(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
#[must_use]
pub fn evaluate(snapshot: &Snapshot, weights: &PowerWeights) -> PowerJudgment {
    let player = &snapshot.player;
    let opponent = &snapshot.lane_opponent;

    let level_diff = player.level as i32 - opponent.level as i32;
    let item_advantage = player.item_count as i32 - opponent.item_count as i32;
    let health_advantage = player.health_fraction() - opponent.health_fraction();

    let power_score = level_diff as f32 * weights.level_weight
        + item_advantage as f32 * weights.item_weight
        + health_advantage * weights.health_weight;

    let recommendation = if power_score > weights.all_in_band {
        "All-in window - play for the kill"
    } else if power_score > weights.trade_band {
        "Favorable trade - harass with abilities"
    } else if power_score > weights.balanced_band {
        "Even matchup - play it straight"
    } else if power_score > weights.cautious_band {
        "Unfavorable matchup - play safe"
    } else {
        "Critical disadvantage - only farm under tower"
    };

    PowerJudgment {
        level_diff,
        item_advantage,
        health_advantage,
        power_score,
        can_trade: power_score > weights.trade_band,
        can_all_in: power_score > weights.all_in_band,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use lanecoach_core::{OpponentState, PlayerState};

    use super::*;

    fn snapshot(player: PlayerState, opponent: OpponentState) -> Snapshot {
        Snapshot {
            player,
            lane_opponent: opponent,
            ..Snapshot::default()
        }
    }

    #[test]
    fn two_level_lead_enables_all_in() {
        let snapshot = snapshot(
            PlayerState {
                level: 6,
                ..PlayerState::default()
            },
            OpponentState {
                level: 4,
                ..OpponentState::default()
            },
        );
        let judgment = evaluate(&snapshot, &PowerWeights::default());
        assert_eq!(judgment.level_diff, 2);
        assert_eq!(judgment.power_score, 4.0);
        assert!(judgment.can_all_in);
        assert!(judgment.can_trade);
    }

    #[test]
    fn item_lead_alone_enables_trade_only() {
        let snapshot = snapshot(
            PlayerState {
                item_count: 2,
                ..PlayerState::default()
            },
            OpponentState::default(),
        );
        let judgment = evaluate(&snapshot, &PowerWeights::default());
        assert_eq!(judgment.power_score, 2.0);
        assert!(judgment.can_trade);
        assert!(!judgment.can_all_in);
    }

    #[test]
    fn health_deficit_turns_critical() {
        let snapshot = snapshot(
            PlayerState {
                health: 10.0,
                max_health: 100.0,
                ..PlayerState::default()
            },
            OpponentState {
                level: 2,
                ..OpponentState::default()
            },
        );
        // level_diff=-1 -> -2, health_advantage=-0.9 -> -4.5; total -6.5.
        let judgment = evaluate(&snapshot, &PowerWeights::default());
        assert_eq!(
            judgment.recommendation,
            "Critical disadvantage - only farm under tower"
        );
        assert!(!judgment.can_trade);
    }

    #[test]
    fn mirror_matchup_is_balanced() {
        let judgment = evaluate(
            &snapshot(PlayerState::default(), OpponentState::default()),
            &PowerWeights::default(),
        );
        assert_eq!(judgment.power_score, 0.0);
        assert_eq!(judgment.recommendation, "Even matchup - play it straight");
    }
}
