//! Objective-control extraction from the embedded event stream.
//!
//! Pure aggregation: elite-monster kills bucket by monster kind and tower
//! kills by timestamp; no scoring. Inhibitor kills parse but are not
//! tracked, matching the source data's tower-only building analysis.

use lanecoach_core::{BuildingKind, Frame, MonsterKind, TimelineEvent};
use serde::Serialize;

/// Objective-kill timestamps bucketed by kind, in frame order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ObjectiveControl {
    /// Dragon kill timestamps, in seconds.
    pub dragons: Vec<u32>,
    /// Herald kill timestamps, in seconds.
    pub heralds: Vec<u32>,
    /// Baron kill timestamps, in seconds.
    pub barons: Vec<u32>,
    /// Tower kill timestamps, in seconds.
    pub towers: Vec<u32>,
}

impl ObjectiveControl {
    /// Total number of bucketed objective kills.
    #[must_use]
    pub fn total(&self) -> usize {
        self.dragons.len() + self.heralds.len() + self.barons.len() + self.towers.len()
    }
}

/// Buckets every objective-kill event in the frame sequence.
#[must_use]
pub fn extract_objectives(frames: &[Frame]) -> ObjectiveControl {
    let mut control = ObjectiveControl::default();

    for frame in frames {
        for event in &frame.events {
            match *event {
                TimelineEvent::EliteMonsterKill {
                    monster,
                    timestamp_secs,
                } => match monster {
                    MonsterKind::Dragon => control.dragons.push(timestamp_secs),
                    MonsterKind::Herald => control.heralds.push(timestamp_secs),
                    MonsterKind::Baron => control.barons.push(timestamp_secs),
                },
                TimelineEvent::BuildingKill {
                    building: BuildingKind::Tower,
                    timestamp_secs,
                } => control.towers.push(timestamp_secs),
                TimelineEvent::BuildingKill {
                    building: BuildingKind::Inhibitor,
                    ..
                } => {}
            }
        }
    }

    control
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(events: Vec<TimelineEvent>) -> Frame {
        Frame {
            timestamp_secs: 0,
            participants: std::collections::BTreeMap::new(),
            events,
        }
    }

    #[test]
    fn events_bucket_by_kind_in_order() {
        let frames = vec![
            frame_with(vec![
                TimelineEvent::EliteMonsterKill {
                    monster: MonsterKind::Dragon,
                    timestamp_secs: 420,
                },
                TimelineEvent::BuildingKill {
                    building: BuildingKind::Tower,
                    timestamp_secs: 600,
                },
            ]),
            frame_with(vec![
                TimelineEvent::EliteMonsterKill {
                    monster: MonsterKind::Herald,
                    timestamp_secs: 700,
                },
                TimelineEvent::EliteMonsterKill {
                    monster: MonsterKind::Dragon,
                    timestamp_secs: 780,
                },
                TimelineEvent::EliteMonsterKill {
                    monster: MonsterKind::Baron,
                    timestamp_secs: 1400,
                },
            ]),
        ];
        let control = extract_objectives(&frames);
        assert_eq!(control.dragons, vec![420, 780]);
        assert_eq!(control.heralds, vec![700]);
        assert_eq!(control.barons, vec![1400]);
        assert_eq!(control.towers, vec![600]);
        assert_eq!(control.total(), 5);
    }

    #[test]
    fn inhibitor_kills_are_not_tracked() {
        let frames = vec![frame_with(vec![TimelineEvent::BuildingKill {
            building: BuildingKind::Inhibitor,
            timestamp_secs: 1500,
        }])];
        let control = extract_objectives(&frames);
        assert_eq!(control.total(), 0);
    }

    #[test]
    fn empty_timeline_is_empty() {
        assert_eq!(extract_objectives(&[]), ObjectiveControl::default());
    }
}
