use thiserror::Error;

use crate::camera::Viewport;
use crate::mover::{MOVE_SPEED, TURN_STEP};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("viewport {width}x{height} must be non-empty with an even width")]
    Viewport { width: u32, height: u32 },
    #[error("{name} range {min}..{max} is empty or inverted")]
    Range {
        name: &'static str,
        min: u32,
        max: u32,
    },
    #[error("FOV range {min}..{max} must lie strictly between 0 and 180 degrees")]
    FovRange { min: u32, max: u32 },
    #[error("ray range must start at 1 or more, got {0}")]
    RayRange(u32),
    #[error("initial {name} {value} is outside {min}..{max}")]
    Initial {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("{name} must be positive and finite, got {value}")]
    Speed { name: &'static str, value: f64 },
}

/// Session settings. Defaults reproduce the stock 960x480 visualizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub viewport: Viewport,
    pub min_fov: u32,
    pub max_fov: u32,
    pub min_rays: u32,
    pub max_rays: u32,
    pub fov: Option<u32>,
    pub rays: Option<u32>,
    pub move_speed: f64,
    pub turn_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            min_fov: 20,
            max_fov: 120,
            min_rays: 1,
            max_rays: 1000,
            fov: None,
            rays: None,
            move_speed: MOVE_SPEED,
            turn_step: TURN_STEP,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Viewport { width, height } = self.viewport;
        if width == 0 || height == 0 || width % 2 != 0 {
            return Err(ConfigError::Viewport { width, height });
        }

        if self.min_fov >= self.max_fov {
            return Err(ConfigError::Range {
                name: "FOV",
                min: self.min_fov,
                max: self.max_fov,
            });
        }
        if self.min_fov == 0 || self.max_fov >= 180 {
            return Err(ConfigError::FovRange {
                min: self.min_fov,
                max: self.max_fov,
            });
        }

        if self.min_rays >= self.max_rays {
            return Err(ConfigError::Range {
                name: "ray",
                min: self.min_rays,
                max: self.max_rays,
            });
        }
        if self.min_rays == 0 {
            return Err(ConfigError::RayRange(self.min_rays));
        }

        check_initial("FOV", self.fov, self.min_fov, self.max_fov)?;
        check_initial("ray count", self.rays, self.min_rays, self.max_rays)?;

        check_speed("move speed", self.move_speed)?;
        check_speed("turn step", self.turn_step)?;
        Ok(())
    }
}

fn check_initial(name: &'static str, value: Option<u32>, min: u32, max: u32) -> Result<(), ConfigError> {
    match value {
        Some(value) if value < min || value > max => Err(ConfigError::Initial {
            name,
            value,
            min,
            max,
        }),
        _ => Ok(()),
    }
}

fn check_speed(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Speed { name, value })
    }
}
