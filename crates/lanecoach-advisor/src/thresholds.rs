//! Named threshold and weight tables injected into the evaluators.
//!
//! Each evaluator takes its table by reference; the `Default` impls carry
//! the reference tuning. Alternative tunings can be constructed in tests
//! or by callers without touching evaluator logic.

/// Wave-state evaluator tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveThresholds {
    /// Ideal creep score per elapsed minute.
    pub ideal_cs_per_min: f32,
    /// Deficit above which farming becomes the priority.
    pub farm_deficit: f32,
    /// Deficit above which freezing is recommended.
    pub freeze_deficit: f32,
    /// Deficit below which the player is ahead and should push.
    pub push_surplus: f32,
}

impl Default for WaveThresholds {
    fn default() -> Self {
        Self {
            ideal_cs_per_min: 10.0,
            farm_deficit: 15.0,
            freeze_deficit: 10.0,
            push_surplus: -10.0,
        }
    }
}

/// Positional-danger evaluator tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DangerThresholds {
    /// Radius within which an ally counts as nearby, in map units.
    pub ally_radius: f32,
    /// Danger level at which retreat is mandatory.
    pub retreat_level: i32,
    /// Danger level at which caution is advised.
    pub caution_level: i32,
}

impl Default for DangerThresholds {
    fn default() -> Self {
        Self {
            ally_radius: 3000.0,
            retreat_level: 2,
            caution_level: 1,
        }
    }
}

/// Power-level evaluator weights and recommendation bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerWeights {
    /// Multiplier on the level difference.
    pub level_weight: f32,
    /// Multiplier on the item-count difference.
    pub item_weight: f32,
    /// Multiplier on the health-fraction difference.
    pub health_weight: f32,
    /// Score above which an all-in is favored.
    pub all_in_band: f32,
    /// Score above which a trade is favored.
    pub trade_band: f32,
    /// Score above which the matchup is balanced.
    pub balanced_band: f32,
    /// Score above which play is merely cautious (below: critical).
    pub cautious_band: f32,
}

impl Default for PowerWeights {
    fn default() -> Self {
        Self {
            level_weight: 2.0,
            item_weight: 1.0,
            health_weight: 5.0,
            all_in_band: 3.0,
            trade_band: 1.0,
            balanced_band: -1.0,
            cautious_band: -3.0,
        }
    }
}

/// Objective-timing windows and priorities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveTimings {
    /// First dragon spawn, in seconds.
    pub dragon_unlock_secs: u32,
    /// Dragon respawn period, in seconds.
    pub dragon_period_secs: u32,
    /// Width of the "dragon is imminent" window after each period tick.
    pub dragon_window_secs: u32,
    /// Priority of a dragon entry.
    pub dragon_priority: u8,
    /// Inclusive herald availability window, in seconds.
    pub herald_window_secs: (u32, u32),
    /// Priority of a herald entry.
    pub herald_priority: u8,
    /// Baron spawn, in seconds.
    pub baron_unlock_secs: u32,
    /// Priority of a baron entry.
    pub baron_priority: u8,
}

impl Default for ObjectiveTimings {
    fn default() -> Self {
        Self {
            dragon_unlock_secs: 300,
            dragon_period_secs: 300,
            dragon_window_secs: 60,
            dragon_priority: 8,
            herald_window_secs: (360, 840),
            herald_priority: 6,
            baron_unlock_secs: 1200,
            baron_priority: 10,
        }
    }
}

/// Vision evaluator tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionThresholds {
    /// Ideal vision score per elapsed minute.
    pub ideal_per_min: f32,
    /// Deficit above which vision is critically low.
    pub critical_deficit: f32,
    /// Deficit above which more wards are needed.
    pub low_deficit: f32,
    /// Deficit below which vision control is excellent.
    pub excellent_surplus: f32,
}

impl Default for VisionThresholds {
    fn default() -> Self {
        Self {
            ideal_per_min: 1.5,
            critical_deficit: 10.0,
            low_deficit: 5.0,
            excellent_surplus: -5.0,
        }
    }
}

/// Action priorities and gates used by the composer cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposerRules {
    /// Minimum objective-entry priority that produces an objective action.
    pub objective_gate: u8,
    /// Wave deficit above which the early-game farm rule fires.
    pub early_farm_deficit: f32,
    /// Priority of the retreat short-circuit action.
    pub retreat_priority: u8,
    /// Priority of a trade action when an all-in is possible.
    pub all_in_priority: u8,
    /// Priority of a trade action when only a trade is favored.
    pub trade_priority: u8,
    /// Priority of a push action.
    pub push_priority: u8,
    /// Priority of a freeze action.
    pub freeze_priority: u8,
    /// Priority of the early-game farm action.
    pub farm_priority: u8,
    /// Priority of the mid-game roam action.
    pub roam_priority: u8,
    /// Priority of the late-game teamfight action.
    pub teamfight_priority: u8,
    /// Priority of a ward action.
    pub ward_priority: u8,
}

impl Default for ComposerRules {
    fn default() -> Self {
        Self {
            objective_gate: 8,
            early_farm_deficit: 10.0,
            retreat_priority: 10,
            all_in_priority: 8,
            trade_priority: 6,
            push_priority: 5,
            freeze_priority: 7,
            farm_priority: 9,
            roam_priority: 7,
            teamfight_priority: 9,
            ward_priority: 6,
        }
    }
}

/// Aggregate configuration for the whole advisory pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdvisorConfig {
    pub wave: WaveThresholds,
    pub danger: DangerThresholds,
    pub power: PowerWeights,
    pub objectives: ObjectiveTimings,
    pub vision: VisionThresholds,
    pub composer: ComposerRules,
}
