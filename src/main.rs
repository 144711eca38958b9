use anyhow::Context;
use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use rayvis::{Config, Viewport};

use crate::app::App;

mod app;

#[derive(Parser, Debug)]
#[command(author, version, about = "First-person raycasting visualizer", long_about = None)]
struct Args {
    /// Window width in pixels (left half map, right half first-person view)
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Initial field of view in degrees
    #[arg(long)]
    fov: Option<u32>,

    /// Initial number of rays
    #[arg(long)]
    rays: Option<u32>,

    #[arg(long, default_value_t = 20)]
    min_fov: u32,

    #[arg(long, default_value_t = 120)]
    max_fov: u32,

    #[arg(long, default_value_t = 1000)]
    max_rays: u32,

    /// Movement speed in world units per second
    #[arg(long, default_value_t = rayvis::mover::MOVE_SPEED)]
    speed: f64,

    /// Degrees turned per frame while an arrow key is held
    #[arg(long, default_value_t = rayvis::mover::TURN_STEP)]
    turn_step: f64,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            viewport: Viewport::new(self.width, self.height),
            min_fov: self.min_fov,
            max_fov: self.max_fov,
            max_rays: self.max_rays,
            fov: self.fov,
            rays: self.rays,
            move_speed: self.speed,
            turn_step: self.turn_step,
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    config.validate().context("invalid configuration")?;
    log::debug!("{config:?}");

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    // Frames are driven by request_redraw from the handler
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(&config);
    event_loop.run_app(&mut app).context("event loop failed")?;
    Ok(())
}
