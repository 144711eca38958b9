/// Screen dimensions in pixels. The left half shows the top-down view and the
/// right half shows the first-person view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width of one half of the screen (map width, first-person width).
    #[inline]
    pub fn half_width(&self) -> u32 {
        self.width / 2
    }

    /// Half-width of the virtual projection plane, i.e. the center of the
    /// first-person viewport measured from its left edge.
    #[inline]
    pub fn plane_half_width(&self) -> f64 {
        self.width as f64 / 4.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(960, 480)
    }
}

/// Per-frame camera settings. Built once per tick so the ray fan reads one
/// consistent snapshot of FOV and ray count.
#[derive(Debug, Clone, Copy)]
pub struct RayCamera {
    viewport: Viewport,
    fov: f64,       // degrees, meaningful in (0, 180)
    ray_count: u32, // one ray per slot
    distance_to_screen: f64,
    width_per_ray: f64,
}

impl RayCamera {
    /// `map_width` is the horizontal span the ray fan is spread over.
    pub fn new(viewport: Viewport, map_width: u32, fov: f64, ray_count: u32) -> Self {
        let half_fov = (0.5 * fov).to_radians();
        let distance_to_screen = viewport.plane_half_width() / half_fov.tan();
        let width_per_ray = map_width as f64 / ray_count as f64;
        Self {
            viewport,
            fov,
            ray_count,
            distance_to_screen,
            width_per_ray,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    #[inline]
    pub fn ray_count(&self) -> u32 {
        self.ray_count
    }

    /// Distance from the eye to the projection plane (pinhole FOV relation).
    #[inline]
    pub fn distance_to_screen(&self) -> f64 {
        self.distance_to_screen
    }

    /// Horizontal pixels covered by one ray's wall slice.
    #[inline]
    pub fn width_per_ray(&self) -> f64 {
        self.width_per_ray
    }

    /// Sample point of a slot, centered within it, from the plane's left edge.
    #[inline]
    pub fn screen_offset(&self, slot: u32) -> f64 {
        slot as f64 * self.width_per_ray + 0.5 * self.width_per_ray
    }

    /// Signed angle between the view direction and the ray through `slot`.
    /// Evenly spaced on the plane, not in angle, so the view is rectilinear.
    pub fn angle_from_center(&self, slot: u32) -> f64 {
        let from_center = self.screen_offset(slot) - self.viewport.plane_half_width();
        (from_center / self.distance_to_screen).atan().to_degrees()
    }

    /// Left edge of a slot in screen pixels (first-person view starts at the
    /// screen's horizontal middle).
    #[inline]
    pub fn slot_left(&self, slot: u32) -> f64 {
        self.viewport.half_width() as f64 + slot as f64 * self.width_per_ray
    }
}
