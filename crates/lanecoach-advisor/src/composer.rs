//! Action composition: the fixed-precedence rule cascade.
//!
//! The composer merges the five judgments plus the current phase into an
//! ordered, capped action list. It is an early-exit rule cascade, NOT a
//! weighted sum: rules run in the fixed order of [`RULE_ORDER`], each
//! appending zero or more actions, and the danger rule short-circuits
//! everything else.
//!
//! The cascade:
//!
//! 1. **Danger** - mandatory retreat returns a single retreat action and
//!    stops.
//! 2. **Objective** - an objective entry at or above the gate priority.
//! 3. **Power** - trade action (all-in priority beats plain-trade priority).
//! 4. **Wave** - push or freeze.
//! 5. **Phase** - early farm (when behind), mid roam, late teamfight.
//! 6. **Vision** - ward action when behind on vision.
//!
//! The result is stably sorted by descending priority and truncated to
//! [`MAX_ACTIONS`]. Because the sort is stable, ties keep the insertion
//! order above - that tie-break is part of the output contract.

use arrayvec::ArrayVec;
use lanecoach_core::GamePhase;
use serde::Serialize;

use crate::{
    danger::DangerJudgment, objective::ObjectiveJudgment, power::PowerJudgment,
    thresholds::ComposerRules, vision::VisionJudgment, wave::WaveJudgment,
};

/// Maximum number of actions the composer returns.
pub const MAX_ACTIONS: usize = 3;

/// Upper bound on actions accumulated before sorting and truncation.
const ACCUMULATOR_CAP: usize = 8;

/// The kinds of action the composer can recommend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    #[display("retreat")]
    Retreat,
    #[display("objective")]
    Objective,
    #[display("trade")]
    Trade,
    #[display("push")]
    Push,
    #[display("freeze")]
    Freeze,
    #[display("farm")]
    Farm,
    #[display("roam")]
    Roam,
    #[display("teamfight")]
    Teamfight,
    #[display("ward")]
    Ward,
}

/// One prioritized action recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedAction {
    /// What to do.
    pub kind: ActionKind,
    /// Priority on a 0-10 scale, higher first.
    pub priority: u8,
    /// Why the action was recommended.
    pub reason: &'static str,
}

/// One rule of the cascade. Evaluated in [`RULE_ORDER`]; the order is the
/// precedence contract, so reordering this table changes the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CascadeRule {
    Danger,
    Objective,
    Power,
    Wave,
    Phase,
    Vision,
}

const RULE_ORDER: [CascadeRule; 6] = [
    CascadeRule::Danger,
    CascadeRule::Objective,
    CascadeRule::Power,
    CascadeRule::Wave,
    CascadeRule::Phase,
    CascadeRule::Vision,
];

/// Judgments feeding one composition pass.
#[derive(Debug, Clone, Copy)]
pub struct JudgmentSet<'a> {
    pub wave: &'a WaveJudgment,
    pub danger: &'a DangerJudgment,
    pub power: &'a PowerJudgment,
    pub objective: &'a ObjectiveJudgment,
    pub vision: &'a VisionJudgment,
}

/// Composes the prioritized action list for one snapshot's judgments.
///
/// Returns at most [`MAX_ACTIONS`] actions, sorted by non-increasing
/// priority with ties broken by cascade insertion order.
#[must_use]
pub fn compose(
    phase: GamePhase,
    judgments: &JudgmentSet<'_>,
    rules: &ComposerRules,
) -> Vec<RecommendedAction> {
    let mut actions = ArrayVec::<RecommendedAction, ACCUMULATOR_CAP>::new();

    for rule in RULE_ORDER {
        match rule {
            CascadeRule::Danger => {
                if judgments.danger.must_retreat {
                    return vec![RecommendedAction {
                        kind: ActionKind::Retreat,
                        priority: rules.retreat_priority,
                        reason: "Dangerous position - disengage",
                    }];
                }
            }
            CascadeRule::Objective => {
                if let Some(next) = &judgments.objective.next_objective
                    && next.priority >= rules.objective_gate
                {
                    actions.push(RecommendedAction {
                        kind: ActionKind::Objective,
                        priority: next.priority,
                        reason: next.recommendation,
                    });
                }
            }
            CascadeRule::Power => {
                if judgments.power.can_all_in {
                    actions.push(RecommendedAction {
                        kind: ActionKind::Trade,
                        priority: rules.all_in_priority,
                        reason: "All-in window is open",
                    });
                } else if judgments.power.can_trade {
                    actions.push(RecommendedAction {
                        kind: ActionKind::Trade,
                        priority: rules.trade_priority,
                        reason: "Trades are favorable",
                    });
                }
            }
            CascadeRule::Wave => {
                if judgments.wave.should_push {
                    actions.push(RecommendedAction {
                        kind: ActionKind::Push,
                        priority: rules.push_priority,
                        reason: "Push the wave, then look to roam",
                    });
                } else if judgments.wave.should_freeze {
                    actions.push(RecommendedAction {
                        kind: ActionKind::Freeze,
                        priority: rules.freeze_priority,
                        reason: "Behind on CS - freeze for safe farming",
                    });
                }
            }
            CascadeRule::Phase => match phase {
                GamePhase::Early => {
                    if judgments.wave.cs_deficit > rules.early_farm_deficit {
                        actions.push(RecommendedAction {
                            kind: ActionKind::Farm,
                            priority: rules.farm_priority,
                            reason: "Early-game CS matters most",
                        });
                    }
                }
                GamePhase::Mid => {
                    actions.push(RecommendedAction {
                        kind: ActionKind::Roam,
                        priority: rules.roam_priority,
                        reason: "Mid game - roam to spread your lead",
                    });
                }
                GamePhase::Late => {
                    actions.push(RecommendedAction {
                        kind: ActionKind::Teamfight,
                        priority: rules.teamfight_priority,
                        reason: "Late game - group for teamfights",
                    });
                }
            },
            CascadeRule::Vision => {
                if judgments.vision.needs_more_wards {
                    actions.push(RecommendedAction {
                        kind: ActionKind::Ward,
                        priority: rules.ward_priority,
                        reason: "Vision needs attention",
                    });
                }
            }
        }
    }

    // Stable sort: equal priorities keep cascade insertion order.
    let mut actions = actions.into_iter().collect::<Vec<_>>();
    actions.sort_by(|a, b| b.priority.cmp(&a.priority));
    actions.truncate(MAX_ACTIONS);
    actions
}
