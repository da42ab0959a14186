//! Live-match snapshot records, input to the snapshot evaluators.
//!
//! A [`Snapshot`] is an immutable description of one instant of a live
//! match, constructed by the caller from live telemetry or from test
//! fixtures. Missing fields deserialize to documented defaults (zero
//! counts, empty lists, all objectives alive) so that degraded telemetry
//! still produces advisory output rather than an error.

use serde::{Deserialize, Serialize};

/// A 2D position in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    /// Creates a position from map coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position, in map units.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The advised player's state at the snapshot instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current map position.
    #[serde(default)]
    pub position: MapPosition,
    /// Champion level.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Total creep score (lane plus jungle).
    #[serde(default)]
    pub cs: u32,
    /// Current health.
    #[serde(default = "default_health")]
    pub health: f32,
    /// Maximum health.
    #[serde(default = "default_health")]
    pub max_health: f32,
    /// Number of completed items owned.
    #[serde(default)]
    pub item_count: u32,
    /// Accumulated vision score.
    #[serde(default)]
    pub vision_score: f32,
}

fn default_level() -> u32 {
    1
}

fn default_health() -> f32 {
    100.0
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: MapPosition::default(),
            level: default_level(),
            cs: 0,
            health: default_health(),
            max_health: default_health(),
            item_count: 0,
            vision_score: 0.0,
        }
    }
}

impl PlayerState {
    /// Current health as a fraction of maximum health, in `[0, 1]`.
    ///
    /// A non-positive `max_health` (malformed telemetry) substitutes full
    /// health rather than dividing by zero.
    #[must_use]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 1.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// An allied champion's state, as far as the evaluators need it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AllyState {
    /// Current map position.
    #[serde(default)]
    pub position: MapPosition,
}

/// An opposing champion's state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyState {
    /// Last known map position.
    #[serde(default)]
    pub position: MapPosition,
    /// Whether the champion is currently visible on the map.
    #[serde(default)]
    pub visible: bool,
}

/// Availability flags for the time-gated neutral objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveStatus {
    /// Whether the dragon is up.
    #[serde(default = "default_true")]
    pub dragon_alive: bool,
    /// Whether the herald is up.
    #[serde(default = "default_true")]
    pub herald_alive: bool,
    /// Whether the baron is up.
    #[serde(default = "default_true")]
    pub baron_alive: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ObjectiveStatus {
    fn default() -> Self {
        Self {
            dragon_alive: true,
            herald_alive: true,
            baron_alive: true,
        }
    }
}

/// One instantaneous description of a live match, owned by the caller.
///
/// Produced fresh per advisory request and never persisted or mutated by
/// the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Elapsed game time, in seconds.
    #[serde(default)]
    pub elapsed_secs: u32,
    /// The advised player.
    #[serde(default)]
    pub player: PlayerState,
    /// Allied champions (excluding the player).
    #[serde(default)]
    pub allies: Vec<AllyState>,
    /// Opposing champions.
    #[serde(default)]
    pub enemies: Vec<EnemyState>,
    /// The direct lane opponent.
    #[serde(default)]
    pub lane_opponent: OpponentState,
    /// Objective availability flags.
    #[serde(default)]
    pub objectives: ObjectiveStatus,
}

impl Snapshot {
    /// Elapsed whole minutes (floor division).
    #[must_use]
    pub const fn elapsed_minutes(&self) -> u32 {
        self.elapsed_secs / 60
    }
}

/// The lane opponent's state, compared against by the power evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentState {
    /// Champion level.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Current health.
    #[serde(default = "default_health")]
    pub health: f32,
    /// Maximum health.
    #[serde(default = "default_health")]
    pub max_health: f32,
    /// Number of completed items owned.
    #[serde(default)]
    pub item_count: u32,
}

impl Default for OpponentState {
    fn default() -> Self {
        Self {
            level: default_level(),
            health: default_health(),
            max_health: default_health(),
            item_count: 0,
        }
    }
}

impl OpponentState {
    /// Current health as a fraction of maximum health, in `[0, 1]`.
    ///
    /// Same malformed-input guard as [`PlayerState::health_fraction`].
    #[must_use]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 1.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}
