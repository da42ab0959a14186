//! Vision evaluation: vision score against the per-minute ideal.
//!
//! The ideal vision score is `ideal_per_min × elapsed_minutes` (floor
//! minutes); the judgment is driven by the deficit `ideal − actual`. The
//! baseline is zero at zero elapsed minutes.

use lanecoach_core::Snapshot;
use serde::Serialize;

use crate::thresholds::VisionThresholds;

/// Vision judgment for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisionJudgment {
    /// The player's accumulated vision score.
    pub vision_score: f32,
    /// `ideal − actual`; positive means behind.
    pub vision_deficit: f32,
    /// The deficit exceeds the low-vision band.
    pub needs_more_wards: bool,
    /// Vision recommendation.
    pub recommendation: &'static str,
}

/// Evaluates vision-score pace for a snapshot.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn evaluate(snapshot: &Snapshot, thresholds: &VisionThresholds) -> VisionJudgment {
    let ideal = thresholds.ideal_per_min * snapshot.elapsed_minutes() as f32;
    let vision_score = snapshot.player.vision_score;
    let vision_deficit = ideal - vision_score;

    let recommendation = if vision_deficit > thresholds.critical_deficit {
        "Vision is critically low - place wards now"
    } else if vision_deficit > thresholds.low_deficit {
        "Vision score is low - buy and place wards"
    } else if vision_deficit < thresholds.excellent_surplus {
        "Excellent vision control"
    } else {
        "Vision score is on pace"
    };

    VisionJudgment {
        vision_score,
        vision_deficit,
        needs_more_wards: vision_deficit > thresholds.low_deficit,
        recommendation,
    }
}
