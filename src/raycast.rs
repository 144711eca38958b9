use rayon::prelude::*;

use crate::camera::RayCamera;
use crate::geometry::{Point, Wall, heading_vector, normalize_degrees};
use crate::map::Map;
use crate::projection::Projection;

/// Outcome of one ray of the fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayResult {
    pub hit: Option<Point>,
    pub angle_from_center: f64, // signed degrees, negative = left of center
    pub slot: u32,              // 0-based, left to right
}

impl RayResult {
    /// Wall slice for this ray, `None` when the ray hit nothing.
    pub fn projection(&self, position: Point) -> Option<Projection> {
        self.hit
            .map(|hit| Projection::new(position, hit, self.angle_from_center))
    }
}

/// Intersect the ray from `origin` along `heading` with `wall`.
///
/// Uses the parametric line-line form, `t` along the wall and `u` along the
/// ray. Hits exactly on a wall endpoint or at the origin are rejected.
pub fn intersect(wall: &Wall, origin: Point, heading: (f64, f64)) -> Option<Point> {
    let (x1, y1, x2, y2) = (wall.x1, wall.y1, wall.x2, wall.y2);
    let (x3, y3) = (origin.x, origin.y);
    let (x4, y4) = (origin.x + heading.0, origin.y + heading.1);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    // Parallel (or degenerate wall)
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    if t > 0.0 && t < 1.0 && u > 0.0 {
        Some(wall.point_at(t))
    } else {
        None
    }
}

/// Closest wall hit for a ray at absolute `angle` (degrees, screen convention).
/// Equidistant hits resolve to the first wall in iteration order.
pub fn cast_ray(walls: &[Wall], origin: Point, angle: f64) -> Option<Point> {
    let heading = heading_vector(angle);
    let mut closest: Option<(f64, Point)> = None;

    for wall in walls {
        let Some(hit) = intersect(wall, origin, heading) else {
            continue;
        };
        let distance = origin.distance(hit);
        match closest {
            Some((best, _)) if distance >= best => {}
            _ => closest = Some((distance, hit)),
        }
    }

    closest.map(|(_, hit)| hit)
}

/// Cast the whole fan for one frame. Output has `camera.ray_count()` entries in
/// slot order. Pure over its inputs; rays are independent and evaluated in
/// parallel.
pub fn render(map: &Map, camera: &RayCamera, position: Point, direction: f64) -> Vec<RayResult> {
    let walls = map.walls();
    (0..camera.ray_count())
        .into_par_iter()
        .map(|slot| {
            let angle_from_center = camera.angle_from_center(slot);
            let ray_angle = normalize_degrees(direction + angle_from_center);
            RayResult {
                hit: cast_ray(walls, position, ray_angle),
                angle_from_center,
                slot,
            }
        })
        .collect()
}
