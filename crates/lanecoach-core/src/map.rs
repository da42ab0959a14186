//! Map geometry and zone classification.
//!
//! The map is a square of `MAP_SIZE` x `MAP_SIZE` units. Symbolic zones are
//! axis-aligned rectangles that may overlap: the jungle rectangle covers the
//! center of the map and intersects every lane rectangle. Classification is
//! therefore an *ordered* first-match scan - lanes are checked before the
//! jungle, so a point inside both a lane and the jungle classifies as the
//! lane. Reordering [`ZONE_TABLE`] changes the semantics.

use serde::{Deserialize, Serialize};

/// Side length of the square map, in map units.
pub const MAP_SIZE: f32 = 14820.0;

/// Symbolic map region derived from coordinates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Top lane corridor.
    #[display("top")]
    Top,
    /// Middle lane corridor.
    #[display("mid")]
    Mid,
    /// Bottom lane corridor.
    #[display("bot")]
    Bot,
    /// Jungle area between the lanes.
    #[display("jungle")]
    Jungle,
    /// Outside every registered rectangle.
    #[display("unknown")]
    Unknown,
}

/// Axis-aligned rectangle in map coordinates, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRect {
    /// Inclusive `(min, max)` bounds on the x axis.
    pub x: (f32, f32),
    /// Inclusive `(min, max)` bounds on the y axis.
    pub y: (f32, f32),
}

impl ZoneRect {
    /// Creates a rectangle from inclusive axis bounds.
    #[must_use]
    pub const fn new(x: (f32, f32), y: (f32, f32)) -> Self {
        Self { x, y }
    }

    /// Returns true if the point lies inside the rectangle (bounds inclusive).
    #[must_use]
    pub const fn contains(&self, x: f32, y: f32) -> bool {
        self.x.0 <= x && x <= self.x.1 && self.y.0 <= y && y <= self.y.1
    }
}

/// Ordered zone classification table, scanned front to back.
///
/// Lane rectangles come first; the jungle rectangle is only reached when no
/// lane matched. The jungle overlaps all three lanes, so this order is part
/// of the classification contract, not an optimization.
pub const ZONE_TABLE: [(Zone, ZoneRect); 4] = [
    (Zone::Top, ZoneRect::new((0.0, 5000.0), (9820.0, MAP_SIZE))),
    (Zone::Mid, ZoneRect::new((5000.0, 9820.0), (5000.0, 9820.0))),
    (Zone::Bot, ZoneRect::new((9820.0, MAP_SIZE), (0.0, 5000.0))),
    (
        Zone::Jungle,
        ZoneRect::new((3000.0, 11820.0), (3000.0, 11820.0)),
    ),
];

/// Classifies a map coordinate into a symbolic zone.
///
/// Pure and total: coordinates outside every rectangle (including
/// out-of-map points) yield [`Zone::Unknown`].
///
/// # Examples
///
/// ```
/// use lanecoach_core::map::{Zone, classify_zone};
///
/// assert_eq!(classify_zone(2000.0, 12000.0), Zone::Top);
/// assert_eq!(classify_zone(7000.0, 7000.0), Zone::Mid);
/// assert_eq!(classify_zone(12000.0, 2000.0), Zone::Bot);
/// assert_eq!(classify_zone(4000.0, 4000.0), Zone::Jungle);
/// assert_eq!(classify_zone(500.0, 500.0), Zone::Unknown);
/// ```
#[must_use]
pub fn classify_zone(x: f32, y: f32) -> Zone {
    for (zone, rect) in &ZONE_TABLE {
        if rect.contains(x, y) {
            return *zone;
        }
    }
    Zone::Unknown
}
