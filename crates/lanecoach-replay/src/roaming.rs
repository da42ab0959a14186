//! Roaming event detection: sustained cross-zone movements per actor.
//!
//! A roam is detected when an actor's zone in [`DWELL_WINDOW`] consecutive
//! prior frames is identical and differs from the current frame's zone -
//! the actor held a zone, then moved. The first [`WARMUP_FRAMES`] frames
//! are skipped; at the source data's one-minute frame cadence that is the
//! first five minutes, where lane assignments are still settling.
//!
//! Detection is independent per actor; there is no cross-actor state, and
//! re-running the detector on the same frames yields the same events.

use lanecoach_core::{Frame, ParticipantId, Zone, classify_zone};
use serde::Serialize;

/// Number of leading frames skipped as warmup (one frame per minute in
/// the source data). Detection starts at this frame index.
pub const WARMUP_FRAMES: usize = 5;

/// Number of consecutive prior frames that must share a zone.
pub const DWELL_WINDOW: usize = 3;

/// A detected cross-zone movement by one actor.
///
/// Immutable once emitted; it has no lifecycle beyond the analysis pass
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoamingEvent {
    /// Frame timestamp at which the movement was detected, in seconds.
    pub timestamp_secs: u32,
    /// The actor that moved.
    pub participant: ParticipantId,
    /// Zone held over the dwell window.
    pub from_zone: Zone,
    /// Zone the actor moved into.
    pub to_zone: Zone,
    /// Actor level at detection time.
    pub level: u32,
    /// Recorded vision contribution at detection time.
    pub vision_score: f32,
    /// Whether the roam converted into a kill or assist. Not derivable
    /// from this frame source; always `None` here, to be filled by a
    /// kill-event linkage stage if one exists upstream.
    pub success: Option<bool>,
    /// Whether the roam target's escape summoner ability was available.
    /// Not derivable from this frame source; always `None` here.
    pub enemy_flash_available: Option<bool>,
}

/// Scans a frame sequence and emits all roaming events, per actor.
///
/// # Examples
///
/// ```
/// use lanecoach_core::Frame;
/// use lanecoach_replay::roaming::detect_roaming;
///
/// let frames: Vec<Frame> = vec![];
/// assert!(detect_roaming(&frames).is_empty());
/// ```
#[must_use]
pub fn detect_roaming(frames: &[Frame]) -> Vec<RoamingEvent> {
    let mut events = Vec::new();

    for (i, frame) in frames.iter().enumerate() {
        if i < WARMUP_FRAMES {
            continue;
        }
        for (&participant, data) in &frame.participants {
            let current_zone = classify_zone(data.position.x, data.position.y);
            let Some(from_zone) = held_zone(&frames[i - DWELL_WINDOW..i], participant) else {
                continue;
            };
            if from_zone != current_zone {
                events.push(RoamingEvent {
                    timestamp_secs: frame.timestamp_secs,
                    participant,
                    from_zone,
                    to_zone: current_zone,
                    level: data.level,
                    vision_score: data.ward_score,
                    success: None,
                    enemy_flash_available: None,
                });
            }
        }
    }

    events
}

/// Returns the zone the participant held across every frame of the
/// window, or `None` if the zones differ or the participant is missing
/// from any frame (incomplete window).
fn held_zone(window: &[Frame], participant: ParticipantId) -> Option<Zone> {
    let mut held = None;
    for frame in window {
        let data = frame.participants.get(&participant)?;
        let zone = classify_zone(data.position.x, data.position.y);
        match held {
            None => held = Some(zone),
            Some(z) if z == zone => {}
            Some(_) => return None,
        }
    }
    held
}
