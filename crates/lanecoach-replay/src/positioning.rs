//! Positional safety scoring from inter-actor distances.
//!
//! Per frame and per actor, the distances to every other *rostered*
//! participant are partitioned by the caller-supplied team roster and
//! averaged per side:
//!
//! ```text
//! safety = (avg_enemy_distance / 1000) − (avg_ally_distance / 2000)
//! ```
//!
//! clamped to `[0, 10]`. An empty side substitutes [`FALLBACK_DISTANCE`]:
//! no visible opponents must not read as perfectly safe, and no nearby
//! allies must read as exposed.
//!
//! Scores are aggregated per game phase across all frames and actors.

use std::collections::BTreeMap;

use lanecoach_core::{Frame, GamePhase, ParticipantId, TeamRoster};
use lanecoach_stats::DescriptiveStats;
use serde::Serialize;

/// Distance substituted for an empty ally or opponent partition,
/// in map units.
pub const FALLBACK_DISTANCE: f32 = 10_000.0;

/// Divisor applied to the average opponent distance.
pub const ENEMY_DISTANCE_SCALE: f32 = 1000.0;

/// Divisor applied to the average ally distance.
pub const ALLY_DISTANCE_SCALE: f32 = 2000.0;

/// Inclusive bounds of the safety score.
pub const SAFETY_RANGE: (f32, f32) = (0.0, 10.0);

/// Computes the safety score of one actor in one frame.
///
/// Returns `None` when the actor is absent from the frame or not in the
/// roster - team membership is never guessed.
#[must_use]
pub fn safety_score(frame: &Frame, id: ParticipantId, roster: &TeamRoster) -> Option<f32> {
    let own_team = roster.team_of(id)?;
    let own_position = frame.participants.get(&id)?.position;

    let mut ally_distances = Vec::new();
    let mut enemy_distances = Vec::new();
    for (&other, data) in &frame.participants {
        if other == id {
            continue;
        }
        // Unrostered participants are skipped, not guessed.
        let Some(team) = roster.team_of(other) else {
            continue;
        };
        let distance = own_position.distance_to(&data.position);
        if team == own_team {
            ally_distances.push(distance);
        } else {
            enemy_distances.push(distance);
        }
    }

    let avg_ally = average_or_fallback(&ally_distances);
    let avg_enemy = average_or_fallback(&enemy_distances);

    let score = avg_enemy / ENEMY_DISTANCE_SCALE - avg_ally / ALLY_DISTANCE_SCALE;
    Some(score.clamp(SAFETY_RANGE.0, SAFETY_RANGE.1))
}

#[expect(clippy::cast_precision_loss)]
fn average_or_fallback(distances: &[f32]) -> f32 {
    if distances.is_empty() {
        FALLBACK_DISTANCE
    } else {
        distances.iter().sum::<f32>() / distances.len() as f32
    }
}

/// Per-phase aggregation of safety scores over a whole timeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PositioningReport {
    /// Safety-score distribution per game phase. Phases with no scored
    /// frames are absent.
    pub per_phase: BTreeMap<GamePhase, DescriptiveStats>,
}

impl PositioningReport {
    /// Mean safety score for a phase, if any frames fell into it.
    #[must_use]
    pub fn mean_for(&self, phase: GamePhase) -> Option<f32> {
        self.per_phase.get(&phase).map(|stats| stats.mean)
    }
}

/// Scores every rostered actor in every frame and aggregates per phase.
#[must_use]
pub fn analyze_positioning(frames: &[Frame], roster: &TeamRoster) -> PositioningReport {
    let mut per_phase_scores: BTreeMap<GamePhase, Vec<f32>> = BTreeMap::new();

    for frame in frames {
        let phase = GamePhase::from_elapsed(frame.timestamp_secs);
        for &id in frame.participants.keys() {
            if let Some(score) = safety_score(frame, id, roster) {
                per_phase_scores.entry(phase).or_default().push(score);
            }
        }
    }

    let per_phase = per_phase_scores
        .into_iter()
        .filter_map(|(phase, scores)| Some((phase, DescriptiveStats::new(scores)?)))
        .collect();

    PositioningReport { per_phase }
}

#[cfg(test)]
mod tests {
    use lanecoach_core::{MapPosition, ParticipantFrame};

    use super::*;

    fn roster() -> TeamRoster {
        TeamRoster::from_teams(
            &[1, 2].map(ParticipantId),
            &[6, 7].map(ParticipantId),
        )
        .unwrap()
    }

    fn frame(timestamp_secs: u32, positions: &[(u8, f32, f32)]) -> Frame {
        Frame {
            timestamp_secs,
            participants: positions
                .iter()
                .map(|&(id, x, y)| {
                    (
                        ParticipantId(id),
                        ParticipantFrame {
                            position: MapPosition::new(x, y),
                            ..ParticipantFrame::default()
                        },
                    )
                })
                .collect(),
            events: Vec::new(),
        }
    }

    #[test]
    fn near_ally_far_enemy_is_safe() {
        // Ally 1000 units away, enemy 8000 units away:
        // 8000/1000 - 1000/2000 = 7.5.
        let frame = frame(60, &[(1, 0.0, 0.0), (2, 1000.0, 0.0), (6, 8000.0, 0.0)]);
        let score = safety_score(&frame, ParticipantId(1), &roster()).unwrap();
        assert!((score - 7.5).abs() < 1e-4);
    }

    #[test]
    fn score_is_clamped_to_range() {
        // Enemy on top of the actor, ally absent: large negative raw
        // score clamps to 0.
        let exposed = frame(60, &[(1, 0.0, 0.0), (6, 10.0, 0.0)]);
        let score = safety_score(&exposed, ParticipantId(1), &roster()).unwrap();
        assert_eq!(score, 0.0);

        // Far enemy, touching ally: raw score above 10 clamps to 10.
        let huddled = frame(60, &[(1, 0.0, 0.0), (2, 0.0, 0.0), (6, 14_000.0, 0.0)]);
        let score = safety_score(&huddled, ParticipantId(1), &roster()).unwrap();
        assert_eq!(score, 10.0);
    }

    #[test]
    fn empty_sides_use_the_fallback_distance() {
        // Alone in the frame: both sides fall back to 10000;
        // 10000/1000 - 10000/2000 = 5.
        let alone = frame(60, &[(1, 0.0, 0.0)]);
        let score = safety_score(&alone, ParticipantId(1), &roster()).unwrap();
        assert_eq!(score, 5.0);
    }

    #[test]
    fn unrostered_actor_is_not_scored() {
        let frame = frame(60, &[(9, 0.0, 0.0), (1, 100.0, 0.0)]);
        assert_eq!(safety_score(&frame, ParticipantId(9), &roster()), None);
    }

    #[test]
    fn unrostered_neighbors_are_ignored() {
        // Participant 9 is unrostered; the score must equal the
        // alone-in-frame fallback case.
        let with_stranger = frame(60, &[(1, 0.0, 0.0), (9, 50.0, 0.0)]);
        let score = safety_score(&with_stranger, ParticipantId(1), &roster()).unwrap();
        assert_eq!(score, 5.0);
    }

    #[test]
    fn report_buckets_by_phase() {
        let frames = vec![
            frame(60, &[(1, 0.0, 0.0)]),
            frame(1000, &[(1, 0.0, 0.0)]),
            frame(2000, &[(1, 0.0, 0.0)]),
        ];
        let report = analyze_positioning(&frames, &roster());
        assert_eq!(report.per_phase.len(), 3);
        assert_eq!(report.mean_for(GamePhase::Early), Some(5.0));
        assert_eq!(report.mean_for(GamePhase::Mid), Some(5.0));
        assert_eq!(report.mean_for(GamePhase::Late), Some(5.0));
    }

    #[test]
    fn empty_timeline_has_no_phases() {
        let report = analyze_positioning(&[], &roster());
        assert!(report.per_phase.is_empty());
        assert_eq!(report.mean_for(GamePhase::Early), None);
    }
}
