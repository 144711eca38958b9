/// Track size in pixels.
pub const TRACK_WIDTH: u32 = 100;
pub const TRACK_HEIGHT: u32 = 15;

/// Horizontal slider mapping a marker position to an integer in `[min, max]`.
/// Coordinates are screen pixels with the origin at the top-left.
#[derive(Debug, Clone)]
pub struct Slider {
    pub name: &'static str,
    pub x: i32,
    pub y: i32,
    min: f64,
    max: f64,
    percentage: f64,
    selected: bool,
}

impl Slider {
    pub fn new(name: &'static str, x: i32, y: i32, min: u32, max: u32) -> Self {
        Self {
            name,
            x,
            y,
            min: min as f64,
            max: max as f64,
            percentage: 0.5,
            selected: false,
        }
    }

    /// Place the marker at `value`, clamped to the range.
    pub fn set_value(&mut self, value: u32) {
        let span = self.max - self.min;
        self.percentage = if span > 0.0 {
            ((value as f64 - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn value(&self) -> u32 {
        let v = (self.min + self.percentage * (self.max - self.min)).round();
        v.min(self.max).max(self.min) as u32
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Select the slider and jump the marker if the press lands on the track.
    /// Returns whether the slider took the press.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        let inside_x = x > self.x && x < self.x + TRACK_WIDTH as i32;
        let inside_y = y > self.y && y < self.y + TRACK_HEIGHT as i32;
        if inside_x && inside_y {
            self.percentage = (x - self.x) as f64 / TRACK_WIDTH as f64;
            self.selected = true;
        }
        self.selected
    }

    /// Follow the cursor while selected; the marker is clamped to the track.
    pub fn drag(&mut self, x: i32, _y: i32) {
        if self.selected {
            let x = x.clamp(self.x, self.x + TRACK_WIDTH as i32);
            self.percentage = (x - self.x) as f64 / TRACK_WIDTH as f64;
        }
    }

    pub fn release(&mut self) {
        self.selected = false;
    }

    /// Marker center in screen pixels.
    pub fn marker_x(&self) -> i32 {
        self.x + (TRACK_WIDTH as f64 * self.percentage).round() as i32
    }
}
