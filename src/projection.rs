use crate::geometry::Point;

/// World-to-pixel factor for wall slice heights, tuned for the default arena.
pub const WALL_SCALE: f64 = 15_000.0;
/// Corrected distance at which walls fade to black.
pub const SHADE_FALLOFF: f64 = 500.0;
/// Floor for the corrected distance when the eye sits on a wall.
pub const MIN_DISTANCE: f64 = 1e-3;

/// Screen-space description of one ray's wall slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub true_distance: f64,
    pub corrected_distance: f64,
    pub height: f64,
    pub shade: f64, // 0 = black, 1 = white
}

impl Projection {
    pub fn new(position: Point, hit: Point, angle_from_center: f64) -> Self {
        let true_distance = position.distance(hit);
        let corrected_distance = corrected_distance(true_distance, angle_from_center);
        let clamped = corrected_distance.max(MIN_DISTANCE);
        Self {
            true_distance,
            corrected_distance,
            height: WALL_SCALE / clamped,
            shade: shade(corrected_distance),
        }
    }

    /// Shade as a grey channel value.
    #[inline]
    pub fn grey(&self) -> u8 {
        (self.shade * 255.0).round() as u8
    }
}

/// Radial distance projected onto the viewing axis (removes fisheye).
#[inline]
pub fn corrected_distance(true_distance: f64, angle_from_center: f64) -> f64 {
    true_distance * angle_from_center.abs().to_radians().cos()
}

/// Linear falloff from white at distance 0 to black at `SHADE_FALLOFF`.
#[inline]
pub fn shade(corrected_distance: f64) -> f64 {
    let s = 1.0 - corrected_distance / SHADE_FALLOFF;
    if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) }
}
