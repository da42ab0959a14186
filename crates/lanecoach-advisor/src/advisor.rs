//! Top-level advisory orchestration.
//!
//! [`GameAdvisor`] runs the five snapshot evaluators and the action
//! composer over a single [`Snapshot`], producing one [`Advisory`]. The
//! advisor holds only its configuration: there is no hidden state, no
//! randomness, and no I/O, so advising the same snapshot twice yields
//! identical output.

use lanecoach_core::{GamePhase, Snapshot};
use serde::Serialize;

use crate::{
    composer::{self, JudgmentSet, RecommendedAction},
    danger::{self, DangerJudgment},
    objective::{self, ObjectiveJudgment},
    power::{self, PowerJudgment},
    thresholds::AdvisorConfig,
    vision::{self, VisionJudgment},
    wave::{self, WaveJudgment},
};

/// The complete advisory output for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    /// Game phase at the snapshot instant.
    pub phase: GamePhase,
    /// Recommended actions, at most three, by descending priority.
    pub actions: Vec<RecommendedAction>,
    /// Wave-state judgment.
    pub wave: WaveJudgment,
    /// Positional-danger judgment.
    pub danger: DangerJudgment,
    /// Power-level judgment.
    pub power: PowerJudgment,
    /// Objective-timing judgment.
    pub objective: ObjectiveJudgment,
    /// Vision judgment.
    pub vision: VisionJudgment,
}

/// Stateless advisory engine over momentary game snapshots.
///
/// # Examples
///
/// ```
/// use lanecoach_advisor::GameAdvisor;
/// use lanecoach_core::{GamePhase, Snapshot};
///
/// let advisor = GameAdvisor::default();
/// let advisory = advisor.advise(&Snapshot::default());
///
/// assert_eq!(advisory.phase, GamePhase::Early);
/// assert!(advisory.actions.len() <= 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameAdvisor {
    config: AdvisorConfig,
}

impl GameAdvisor {
    /// Creates an advisor with the given tuning.
    #[must_use]
    pub const fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// The active tuning.
    #[must_use]
    pub const fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Analyzes one snapshot and composes prioritized actions.
    #[must_use]
    pub fn advise(&self, snapshot: &Snapshot) -> Advisory {
        let phase = GamePhase::from_elapsed(snapshot.elapsed_secs);

        let wave = wave::evaluate(snapshot, &self.config.wave);
        let danger = danger::evaluate(snapshot, &self.config.danger);
        let power = power::evaluate(snapshot, &self.config.power);
        let objective = objective::evaluate(snapshot, &self.config.objectives);
        let vision = vision::evaluate(snapshot, &self.config.vision);

        let actions = composer::compose(
            phase,
            &JudgmentSet {
                wave: &wave,
                danger: &danger,
                power: &power,
                objective: &objective,
                vision: &vision,
            },
            &self.config.composer,
        );

        Advisory {
            phase,
            actions,
            wave,
            danger,
            power,
            objective,
            vision,
        }
    }
}
