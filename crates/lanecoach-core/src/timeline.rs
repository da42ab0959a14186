//! Recorded-match timeline records, input to the replay analyzers.
//!
//! A timeline is an ordered sequence of [`Frame`]s, each carrying one slice
//! of per-participant telemetry plus the discrete events that occurred up
//! to that offset. Frames must be supplied in non-decreasing timestamp
//! order; the analyzers do not reorder or validate the sequence.
//!
//! Team membership is NOT inferred from participant identifiers. The
//! caller supplies an explicit [`TeamRoster`] built from match metadata;
//! participants absent from the roster are skipped by team-sensitive
//! analyses rather than guessed at.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::snapshot::MapPosition;

/// Opaque participant identifier within one match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct ParticipantId(pub u8);

/// One participant's telemetry in a single frame.
///
/// Counters are cumulative from the start of the match, matching how
/// timeline providers report them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParticipantFrame {
    /// Map position at the frame instant.
    #[serde(default)]
    pub position: MapPosition,
    /// Champion level.
    #[serde(default)]
    pub level: u32,
    /// Cumulative lane minion kills.
    #[serde(default)]
    pub minion_kills: u32,
    /// Cumulative jungle monster kills.
    #[serde(default)]
    pub jungle_minion_kills: u32,
    /// Cumulative vision (ward) score contribution.
    #[serde(default)]
    pub ward_score: f32,
}

/// Elite monster kinds tracked by the objective extractor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum MonsterKind {
    #[display("dragon")]
    Dragon,
    #[display("herald")]
    Herald,
    #[display("baron")]
    Baron,
}

/// Building kinds that can appear in structure-kill events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    #[display("tower")]
    Tower,
    #[display("inhibitor")]
    Inhibitor,
}

/// A discrete event embedded in a frame's event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineEvent {
    /// An elite neutral monster was killed.
    EliteMonsterKill {
        monster: MonsterKind,
        timestamp_secs: u32,
    },
    /// A structure was destroyed.
    BuildingKill {
        building: BuildingKind,
        timestamp_secs: u32,
    },
}

/// One slice of a recorded match timeline at a fixed time offset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Offset from match start, in seconds.
    #[serde(default)]
    pub timestamp_secs: u32,
    /// Per-participant telemetry at this offset.
    #[serde(default)]
    pub participants: BTreeMap<ParticipantId, ParticipantFrame>,
    /// Discrete events that occurred since the previous frame, in order.
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

/// Side of the map a participant plays on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    #[display("blue")]
    Blue,
    #[display("red")]
    Red,
}

/// Error raised when a roster assigns one participant to both teams.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("participant {id} assigned to more than one team")]
pub struct RosterError {
    /// The participant that appeared twice.
    pub id: ParticipantId,
}

/// Explicit participant-to-team mapping supplied by the caller.
///
/// Built from match metadata, never inferred from identifier ranges.
///
/// # Examples
///
/// ```
/// use lanecoach_core::timeline::{ParticipantId, Team, TeamRoster};
///
/// let blue = [1, 2, 3, 4, 5].map(ParticipantId);
/// let red = [6, 7, 8, 9, 10].map(ParticipantId);
/// let roster = TeamRoster::from_teams(&blue, &red).unwrap();
///
/// assert_eq!(roster.team_of(ParticipantId(3)), Some(Team::Blue));
/// assert_eq!(
///     roster.are_allies(ParticipantId(1), ParticipantId(6)),
///     Some(false)
/// );
/// assert_eq!(roster.team_of(ParticipantId(42)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    assignments: BTreeMap<ParticipantId, Team>,
}

impl TeamRoster {
    /// Builds a roster from the two team membership lists.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if any participant appears on both teams
    /// (or twice on one team). This is the fail-fast ingestion boundary;
    /// the analyzers themselves never validate membership.
    pub fn from_teams(
        blue: &[ParticipantId],
        red: &[ParticipantId],
    ) -> Result<Self, RosterError> {
        let mut assignments = BTreeMap::new();
        for (ids, team) in [(blue, Team::Blue), (red, Team::Red)] {
            for &id in ids {
                if assignments.insert(id, team).is_some() {
                    return Err(RosterError { id });
                }
            }
        }
        Ok(Self { assignments })
    }

    /// Returns the team of a participant, or `None` if unrostered.
    #[must_use]
    pub fn team_of(&self, id: ParticipantId) -> Option<Team> {
        self.assignments.get(&id).copied()
    }

    /// Returns whether two participants are on the same team.
    ///
    /// `None` if either participant is unrostered.
    #[must_use]
    pub fn are_allies(&self, a: ParticipantId, b: ParticipantId) -> Option<bool> {
        Some(self.team_of(a)? == self.team_of(b)?)
    }

    /// Number of rostered participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
