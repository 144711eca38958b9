use rayon::{iter::ParallelIterator, slice::ParallelSliceMut};

use crate::camera::RayCamera;
use crate::geometry::Point;
use crate::map::Map;
use crate::raycast::RayResult;
use crate::slider::{Slider, TRACK_HEIGHT, TRACK_WIDTH};

const VIEWPOINT_RADIUS: i32 = 5;
const MARKER_WIDTH: i32 = 10;
const MARKER_OVERHANG: i32 = 5;

#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    // 0RGB, the layout softbuffer expects
    (b as u32) | ((g as u32) << 8) | ((r as u32) << 16)
}

pub const BLACK: u32 = 0;
pub const WHITE: u32 = 0x00FF_FFFF;
const GRAY: u32 = 0x0080_8080;

/// Everything one frame draws.
pub struct Scene<'a> {
    pub map: &'a Map,
    pub camera: &'a RayCamera,
    pub position: Point,
    pub rays: &'a [RayResult],
    pub sliders: &'a [&'a Slider],
}

/// A `width x height` 0RGB pixel buffer borrowed for drawing.
pub struct Canvas<'a> {
    buf: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut [u32], width: usize, height: usize) -> Self {
        debug_assert_eq!(buf.len(), width * height);
        Self { buf, width, height }
    }

    pub fn clear(&mut self, color: u32) {
        let width = self.width.max(1);
        self.buf.par_chunks_mut(width).for_each(|row| row.fill(color));
    }

    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buf[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.buf[y * self.width + x]
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: u32) {
        let (w, h) = (self.width as f64, self.height as f64);
        let cx0 = x0.round().clamp(0.0, w) as usize;
        let cx1 = x1.round().clamp(0.0, w) as usize;
        let cy0 = y0.round().clamp(0.0, h) as usize;
        let cy1 = y1.round().clamp(0.0, h) as usize;
        if cx0 >= cx1 || cy0 >= cy1 {
            return;
        }
        let width = self.width;
        self.buf[cy0 * width..cy1 * width]
            .par_chunks_mut(width)
            .for_each(|row| row[cx0..cx1].fill(color));
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Bresenham line between integer endpoints, both inclusive.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), color: u32) {
        let (mut x0, mut y0) = from;
        let (x1, y1) = to;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Clip a segment to `[0, max_x] x [0, max_y]` (Liang-Barsky).
fn clip_segment(a: (f64, f64), b: (f64, f64), max_x: f64, max_y: f64) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [
        (-dx, a.0),
        (dx, max_x - a.0),
        (-dy, a.1),
        (dy, max_y - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

/// Top-down view: world y grows upwards, so rows are flipped.
struct TopDown {
    max_x: f64,
    max_y: f64,
}

impl TopDown {
    fn new(map: &Map, canvas_height: usize) -> Self {
        Self {
            max_x: map.width().saturating_sub(1) as f64,
            max_y: (map.height() as usize).min(canvas_height).saturating_sub(1) as f64,
        }
    }

    #[inline]
    fn to_screen(&self, p: (f64, f64)) -> (i32, i32) {
        (p.0.round() as i32, (self.max_y - p.1).round() as i32)
    }

    fn line(&self, canvas: &mut Canvas, a: Point, b: Point, color: u32) {
        if let Some((a, b)) = clip_segment((a.x, a.y), (b.x, b.y), self.max_x, self.max_y) {
            canvas.line(self.to_screen(a), self.to_screen(b), color);
        }
    }
}

pub fn render_frame(buf: &mut [u32], width: usize, height: usize, scene: &Scene) {
    let mut canvas = Canvas::new(buf, width, height);
    canvas.clear(BLACK);

    let top_down = TopDown::new(scene.map, height);
    let camera = scene.camera;
    let mid = height as f64 * 0.5;

    for ray in scene.rays {
        let Some(hit) = ray.hit else {
            continue;
        };
        let Some(projection) = ray.projection(scene.position) else {
            continue;
        };

        top_down.line(&mut canvas, scene.position, hit, WHITE);

        let grey = projection.grey();
        let left = camera.slot_left(ray.slot);
        let top = mid - projection.height * 0.5;
        canvas.fill_rect(
            left,
            top,
            left + camera.width_per_ray(),
            top + projection.height,
            pack_rgb(grey, grey, grey),
        );
    }

    let (px, py) = top_down.to_screen((scene.position.x, scene.position.y));
    canvas.fill_circle(px, py, VIEWPOINT_RADIUS, WHITE);

    for wall in scene.map.walls() {
        top_down.line(&mut canvas, wall.start(), wall.end(), WHITE);
    }

    for slider in scene.sliders {
        draw_slider(&mut canvas, slider);
    }
}

/// Copy a `src_width`-wide frame into a `dst_width x dst_height` buffer.
/// Pixels the frame does not cover are cleared to black.
pub fn blit(dst: &mut [u32], dst_width: usize, dst_height: usize, src: &[u32], src_width: usize) {
    let dst_width = dst_width.max(1);
    let src_width = src_width.max(1);
    let w = dst_width.min(src_width);
    let mut src_rows = src.chunks(src_width);
    for row in dst.chunks_mut(dst_width).take(dst_height) {
        match src_rows.next() {
            Some(src) => {
                let w = w.min(src.len());
                row[..w].copy_from_slice(&src[..w]);
                row[w..].fill(BLACK);
            }
            None => row.fill(BLACK),
        }
    }
}

fn draw_slider(canvas: &mut Canvas, slider: &Slider) {
    let (x, y) = (slider.x as f64, slider.y as f64);
    canvas.fill_rect(
        x,
        y,
        x + TRACK_WIDTH as f64,
        y + TRACK_HEIGHT as f64,
        GRAY,
    );

    let marker = (slider.marker_x() - MARKER_WIDTH / 2) as f64;
    canvas.fill_rect(
        marker,
        y - MARKER_OVERHANG as f64,
        marker + MARKER_WIDTH as f64,
        y + (TRACK_HEIGHT as i32 + MARKER_OVERHANG) as f64,
        WHITE,
    );
}
