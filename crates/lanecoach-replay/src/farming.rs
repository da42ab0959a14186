//! Farming efficiency against the ideal creep-score baseline.
//!
//! Per frame and per actor, once at least one whole minute has elapsed:
//!
//! ```text
//! cs_per_min = (minion_kills + jungle_minion_kills) / elapsed_minutes
//! efficiency = (cs_per_min / IDEAL_CS_PER_MIN) × 100, capped at 100
//! ```
//!
//! Frames before the first whole minute contribute nothing - no rate is
//! ever computed against zero elapsed time, and an empty series reports as
//! absent rather than as NaN.

use lanecoach_core::Frame;
use lanecoach_stats::DescriptiveStats;
use serde::Serialize;

/// Ideal creep score per minute, the efficiency baseline.
pub const IDEAL_CS_PER_MIN: f32 = 10.0;

/// Upper cap on the efficiency percentage.
pub const EFFICIENCY_CAP: f32 = 100.0;

/// Aggregated farming metrics over a whole timeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FarmingReport {
    /// Distribution of per-minute creep-score rates across all observed
    /// (frame, actor) pairs. Absent when no frame passed the elapsed-time
    /// guard.
    pub cs_per_min: Option<DescriptiveStats>,
    /// Distribution of efficiency percentages against the ideal baseline.
    pub efficiency: Option<DescriptiveStats>,
}

impl FarmingReport {
    /// Mean creep score per minute, or `0.0` when nothing was observed.
    #[must_use]
    pub fn avg_cs_per_min(&self) -> f32 {
        self.cs_per_min.as_ref().map_or(0.0, |stats| stats.mean)
    }

    /// Mean efficiency percentage, or `0.0` when nothing was observed.
    #[must_use]
    pub fn avg_efficiency(&self) -> f32 {
        self.efficiency.as_ref().map_or(0.0, |stats| stats.mean)
    }
}

/// Computes farming rate and efficiency across all frames and actors.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn analyze_farming(frames: &[Frame]) -> FarmingReport {
    let mut rates = Vec::new();
    let mut efficiencies = Vec::new();

    for frame in frames {
        let minutes = frame.timestamp_secs / 60;
        if minutes == 0 {
            continue;
        }
        for data in frame.participants.values() {
            let total_cs = data.minion_kills + data.jungle_minion_kills;
            let cs_per_min = total_cs as f32 / minutes as f32;
            rates.push(cs_per_min);
            efficiencies.push((cs_per_min / IDEAL_CS_PER_MIN * 100.0).min(EFFICIENCY_CAP));
        }
    }

    FarmingReport {
        cs_per_min: DescriptiveStats::new(rates),
        efficiency: DescriptiveStats::new(efficiencies),
    }
}

#[cfg(test)]
mod tests {
    use lanecoach_core::{ParticipantFrame, ParticipantId};

    use super::*;

    fn frame(timestamp_secs: u32, cs: &[(u8, u32, u32)]) -> Frame {
        Frame {
            timestamp_secs,
            participants: cs
                .iter()
                .map(|&(id, minion_kills, jungle_minion_kills)| {
                    (
                        ParticipantId(id),
                        ParticipantFrame {
                            minion_kills,
                            jungle_minion_kills,
                            ..ParticipantFrame::default()
                        },
                    )
                })
                .collect(),
            events: Vec::new(),
        }
    }

    #[test]
    fn rate_combines_lane_and_jungle_kills() {
        // 48 lane + 12 jungle at 10 minutes -> 6.0 per minute, 60%.
        let report = analyze_farming(&[frame(600, &[(1, 48, 12)])]);
        assert_eq!(report.avg_cs_per_min(), 6.0);
        assert_eq!(report.avg_efficiency(), 60.0);
    }

    #[test]
    fn efficiency_is_capped() {
        // 150 CS at 10 minutes -> 15 per minute, raw 150% capped to 100.
        let report = analyze_farming(&[frame(600, &[(1, 150, 0)])]);
        assert_eq!(report.avg_efficiency(), 100.0);
        assert_eq!(report.avg_cs_per_min(), 15.0);
    }

    #[test]
    fn zero_elapsed_frames_are_skipped() {
        // 59 seconds floors to zero minutes: nothing is computed.
        let report = analyze_farming(&[frame(0, &[(1, 5, 0)]), frame(59, &[(1, 9, 0)])]);
        assert_eq!(report.cs_per_min, None);
        assert_eq!(report.efficiency, None);
        assert_eq!(report.avg_cs_per_min(), 0.0);
    }

    #[test]
    fn mean_spans_frames_and_actors() {
        let frames = [
            frame(600, &[(1, 60, 0), (2, 100, 0)]),
            frame(1200, &[(1, 160, 0), (2, 200, 0)]),
        ];
        // Rates: 6, 10, 8, 10 -> mean 8.5.
        let report = analyze_farming(&frames);
        assert_eq!(report.avg_cs_per_min(), 8.5);
    }
}
