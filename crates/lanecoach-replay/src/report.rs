//! Combined replay analysis over a whole timeline.

use lanecoach_core::{Frame, TeamRoster};
use serde::Serialize;

use crate::{
    farming::{self, FarmingReport},
    objectives::{self, ObjectiveControl},
    positioning::{self, PositioningReport},
    roaming::{self, RoamingEvent},
};

/// The combined output of all four replay analyses.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ReplayReport {
    /// Detected roaming events, in frame order.
    pub roaming: Vec<RoamingEvent>,
    /// Per-phase positioning safety.
    pub positioning: PositioningReport,
    /// Farming rate and efficiency.
    pub farming: FarmingReport,
    /// Objective-kill timestamps by kind.
    pub objectives: ObjectiveControl,
}

/// Runs all four replay analyses over an ordered frame sequence.
///
/// Frames must be in non-decreasing timestamp order (caller contract).
/// An empty slice yields an empty report.
///
/// # Examples
///
/// ```
/// use lanecoach_core::TeamRoster;
/// use lanecoach_replay::analyze_timeline;
///
/// let report = analyze_timeline(&[], &TeamRoster::default());
/// assert!(report.roaming.is_empty());
/// assert_eq!(report.objectives.total(), 0);
/// ```
#[must_use]
pub fn analyze_timeline(frames: &[Frame], roster: &TeamRoster) -> ReplayReport {
    ReplayReport {
        roaming: roaming::detect_roaming(frames),
        positioning: positioning::analyze_positioning(frames, roster),
        farming: farming::analyze_farming(frames),
        objectives: objectives::extract_objectives(frames),
    }
}

#[cfg(test)]
mod tests {
    use lanecoach_core::{
        MapPosition, MonsterKind, ParticipantFrame, ParticipantId, TimelineEvent, Zone,
    };

    use super::*;

    /// Builds a ten-minute timeline: participant 1 lanes top then roams
    /// mid at minute 9; participant 6 holds mid; a dragon dies at 7:00.
    fn fixture() -> (Vec<Frame>, TeamRoster) {
        let roster =
            TeamRoster::from_teams(&[ParticipantId(1)], &[ParticipantId(6)]).unwrap();
        let top = MapPosition::new(2500.0, 12300.0);
        let mid = MapPosition::new(7400.0, 7400.0);

        let frames: Vec<Frame> = (0u32..10)
            .map(|minute| {
                let own_position = if minute == 9 { mid } else { top };
                let mut frame = Frame {
                    timestamp_secs: minute * 60,
                    ..Frame::default()
                };
                frame.participants.insert(
                    ParticipantId(1),
                    ParticipantFrame {
                        position: own_position,
                        level: minute,
                        minion_kills: minute * 8,
                        ..ParticipantFrame::default()
                    },
                );
                frame.participants.insert(
                    ParticipantId(6),
                    ParticipantFrame {
                        position: mid,
                        minion_kills: minute * 8,
                        ..ParticipantFrame::default()
                    },
                );
                if minute == 7 {
                    frame.events.push(TimelineEvent::EliteMonsterKill {
                        monster: MonsterKind::Dragon,
                        timestamp_secs: 420,
                    });
                }
                frame
            })
            .collect();

        (frames, roster)
    }

    #[test]
    fn full_report_combines_all_analyses() {
        let (frames, roster) = fixture();
        let report = analyze_timeline(&frames, &roster);

        assert_eq!(report.roaming.len(), 1);
        assert_eq!(report.roaming[0].from_zone, Zone::Top);
        assert_eq!(report.roaming[0].to_zone, Zone::Mid);

        assert!(report.positioning.mean_for(lanecoach_core::GamePhase::Early).is_some());
        assert_eq!(report.farming.avg_cs_per_min(), 8.0);
        assert_eq!(report.objectives.dragons, vec![420]);
    }

    #[test]
    fn empty_timeline_yields_empty_report() {
        let report = analyze_timeline(&[], &TeamRoster::default());
        assert_eq!(report, ReplayReport::default());
    }

    #[test]
    fn report_serializes_for_the_adapter_layer() {
        let (frames, roster) = fixture();
        let report = analyze_timeline(&frames, &roster);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["roaming"].is_array());
        assert!(json["positioning"]["per_phase"].is_object());
    }
}
