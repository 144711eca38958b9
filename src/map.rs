use crate::camera::Viewport;
use crate::geometry::Wall;

/// Interior obstacles of the default arena: an acute pair meeting near the
/// center, a long diagonal and a short diagonal at different slopes.
const INTERIOR_WALLS: [Wall; 3] = [
    Wall::new(280.0, 240.0, 335.0, 220.0),
    Wall::new(50.0, 150.0, 290.0, 280.0),
    Wall::new(350.0, 70.0, 470.0, 130.0),
];

/// Immutable set of walls plus the arena bounds. Shares the screen with the
/// first-person view, so it is half the viewport wide.
#[derive(Debug, Clone)]
pub struct Map {
    walls: Vec<Wall>,
    width: u32,
    height: u32,
}

impl Map {
    /// Default arena: closed boundary plus the interior obstacles.
    pub fn new(viewport: Viewport) -> Self {
        let mut map = Self::bounded(viewport);
        map.walls.extend_from_slice(&INTERIOR_WALLS);
        map
    }

    /// Closed rectangle `[0, width-1] x [0, height-1]` and nothing else.
    pub fn bounded(viewport: Viewport) -> Self {
        let width = viewport.half_width();
        let height = viewport.height;
        let (right, top) = (width as f64 - 1.0, height as f64 - 1.0);
        let walls = vec![
            Wall::new(0.0, 0.0, 0.0, top),
            Wall::new(0.0, top, right, top),
            Wall::new(right, top, right, 0.0),
            Wall::new(right, 0.0, 0.0, 0.0),
        ];
        Self {
            walls,
            width,
            height,
        }
    }

    /// Arbitrary walls with the viewport-derived bounds. No boundary is added.
    pub fn from_walls(viewport: Viewport, walls: Vec<Wall>) -> Self {
        Self {
            walls,
            width: viewport.half_width(),
            height: viewport.height,
        }
    }

    /// Walls in insertion order (top-down drawing order).
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
