/// A point in world space. World units line up with top-down view pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A wall is a directed segment from (x1, y1) to (x2, y2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Wall {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Zero-length walls never produce a hit but must not break a cast.
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    /// Point along the wall at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.x1 + t * (self.x2 - self.x1),
            self.y1 + t * (self.y2 - self.y1),
        )
    }
}

/// Unit vector for an angle in the screen-relative convention:
/// 0 degrees points up (+y) and positive angles turn clockwise.
#[inline]
pub fn heading_vector(angle_deg: f64) -> (f64, f64) {
    let a = (90.0 - angle_deg).to_radians();
    (a.cos(), a.sin())
}

/// Wrap an angle into [0, 360).
#[inline]
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let a = angle_deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if a >= 360.0 { 0.0 } else { a }
}
