use bitflags::bitflags;

use crate::geometry::Point;
use crate::map::Map;

/// Translation speed in world units per second.
pub const MOVE_SPEED: f64 = 200.0;
/// Degrees turned per update while a turn key is held. Not scaled by the
/// frame time, so turning speed follows the frame rate.
pub const TURN_STEP: f64 = 1.5;

bitflags! {
    /// Input intents held during one tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Intents: u8 {
        const FORWARD      = 1 << 0;
        const BACKWARD     = 1 << 1;
        const STRAFE_LEFT  = 1 << 2;
        const STRAFE_RIGHT = 1 << 3;
        const TURN_LEFT    = 1 << 4;
        const TURN_RIGHT   = 1 << 5;
    }
}

/// Translation intents in the order they are applied, with the movement angle
/// offset used for each. Movement angles are standard math angles (0 = +x,
/// counter-clockwise), derived as `offset - direction`.
const MOVES: [(Intents, f64); 4] = [
    (Intents::FORWARD, 90.0),
    (Intents::BACKWARD, -90.0),
    (Intents::STRAFE_LEFT, 180.0),
    (Intents::STRAFE_RIGHT, 0.0),
];

/// The user-controlled viewpoint.
#[derive(Debug, Clone)]
pub struct Mover {
    pub position: Point,
    pub direction: f64, // degrees, screen convention (0 = up, clockwise)
    pub speed: f64,
    pub turn_step: f64,
}

impl Default for Mover {
    fn default() -> Self {
        Self::new(Point::new(300.0, 200.0), 0.0)
    }
}

impl Mover {
    pub fn new(position: Point, direction: f64) -> Self {
        Self {
            position,
            direction,
            speed: MOVE_SPEED,
            turn_step: TURN_STEP,
        }
    }

    /// Apply one tick of input.
    ///
    /// Each held translation intent moves the mover on its own, starting from
    /// the position left by the previous one, so diagonals are not normalized.
    /// Turning happens after all translation.
    pub fn update(&mut self, dt: f64, intents: Intents, map: &Map) {
        for (intent, offset) in MOVES {
            if intents.contains(intent) {
                self.step(offset - self.direction, dt, map);
            }
        }

        if intents.contains(Intents::TURN_LEFT) {
            self.direction -= self.turn_step;
        }
        if intents.contains(Intents::TURN_RIGHT) {
            self.direction += self.turn_step;
        }
    }

    /// Move along `angle_deg` for `dt` seconds. Each axis is clamped on its
    /// own, so the mover slides along the boundary instead of stopping.
    fn step(&mut self, angle_deg: f64, dt: f64, map: &Map) {
        let a = angle_deg.to_radians();
        let distance = self.speed * dt;
        let target = self.position.offset(a.cos() * distance, a.sin() * distance);

        if target.x > 1.0 && target.x < map.width() as f64 - 1.0 {
            self.position.x = target.x;
        }
        if target.y > 1.0 && target.y < map.height() as f64 - 1.0 {
            self.position.y = target.y;
        }
    }
}
