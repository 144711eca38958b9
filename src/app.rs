use std::collections::HashSet;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, anyhow};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use rayvis::renderer::{self, Scene};
use rayvis::{Config, Intents, Map, Mover, RayCamera, Slider, Viewport, raycast};

const KEY_INTENTS: [(KeyCode, Intents); 6] = [
    (KeyCode::KeyW, Intents::FORWARD),
    (KeyCode::KeyS, Intents::BACKWARD),
    (KeyCode::KeyA, Intents::STRAFE_LEFT),
    (KeyCode::KeyD, Intents::STRAFE_RIGHT),
    (KeyCode::ArrowLeft, Intents::TURN_LEFT),
    (KeyCode::ArrowRight, Intents::TURN_RIGHT),
];

/// Largest frame time fed to the mover, so a stalled window does not teleport.
const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

pub struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    viewport: Viewport,
    map: Map,
    mover: Mover,
    fov_slider: Slider,
    rays_slider: Slider,

    // HUD
    frame_counter: u32,
    last_fps_print: Instant,

    fb: Vec<u32>,

    // Input
    keys_down: HashSet<KeyCode>,
    cursor: (i32, i32),
    last_tick: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let viewport = config.viewport;
        let map = Map::new(viewport);

        let mut mover = Mover::default();
        mover.speed = config.move_speed;
        mover.turn_step = config.turn_step;

        let mut fov_slider = Slider::new("FOV", 20, 35, config.min_fov, config.max_fov);
        if let Some(fov) = config.fov {
            fov_slider.set_value(fov);
        }
        let mut rays_slider = Slider::new("Amount of rays", 20, 65, config.min_rays, config.max_rays);
        if let Some(rays) = config.rays {
            rays_slider.set_value(rays);
        }

        log::info!(
            "Map {}x{} with {} walls, FOV {}, {} rays",
            map.width(),
            map.height(),
            map.walls().len(),
            fov_slider.value(),
            rays_slider.value()
        );

        Self {
            window: None,
            surface: None,
            viewport,
            map,
            mover,
            fov_slider,
            rays_slider,
            frame_counter: 0,
            last_fps_print: Instant::now(),
            fb: vec![0; viewport.width as usize * viewport.height as usize],
            keys_down: HashSet::new(),
            cursor: (0, 0),
            last_tick: Instant::now(),
        }
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title("rayvis")
            .with_resizable(false)
            .with_inner_size(PhysicalSize::new(self.viewport.width, self.viewport.height));

        let window = Rc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );
        // softbuffer errors are not Send + Sync
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer context: {e}"))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer surface: {e}"))?;

        let size = window.inner_size();
        log::info!("Window created at {}x{}", size.width, size.height);

        window.request_redraw();
        self.surface = Some(surface);
        self.window = Some(window);
        self.last_tick = Instant::now();
        Ok(())
    }

    fn intents(&self) -> Intents {
        KEY_INTENTS
            .iter()
            .filter(|(key, _)| self.keys_down.contains(key))
            .fold(Intents::empty(), |acc, (_, intent)| acc | *intent)
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).min(MAX_FRAME_TIME);
        self.last_tick = now;

        let intents = self.intents();
        self.mover.update(dt.as_secs_f64(), intents, &self.map);
    }

    fn draw(&mut self) {
        // Snapshot everything the ray fan reads before casting
        let position = self.mover.position;
        let direction = self.mover.direction;
        let camera = RayCamera::new(
            self.viewport,
            self.map.width(),
            self.fov_slider.value() as f64,
            self.rays_slider.value(),
        );

        let rays = raycast::render(&self.map, &camera, position, direction);
        let scene = Scene {
            map: &self.map,
            camera: &camera,
            position,
            rays: &rays,
            sliders: &[&self.fov_slider, &self.rays_slider],
        };
        renderer::render_frame(
            &mut self.fb,
            self.viewport.width as usize,
            self.viewport.height as usize,
            &scene,
        );
    }

    fn present(&mut self, id: WindowId) {
        let (window, surface) = match (&self.window, &mut self.surface) {
            (Some(w), Some(s)) if w.id() == id => (w, s),
            _ => return,
        };

        let size = window.inner_size();
        let (Some(dw), Some(dh)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return; // Minimized window, skip drawing
        };
        if let Err(e) = surface.resize(dw, dh) {
            log::warn!("Failed to resize surface: {e}");
            return;
        }

        let mut buf = match surface.buffer_mut() {
            Ok(buf) => buf,
            Err(e) => {
                log::warn!("Failed to map surface buffer: {e}");
                return;
            }
        };

        // The window is not resizable, but the platform may still hand out a
        // different size
        renderer::blit(
            &mut buf,
            size.width as usize,
            size.height as usize,
            &self.fb,
            self.viewport.width as usize,
        );

        if let Err(e) = buf.present() {
            log::error!("Failed to present frame: {e}");
        }
    }

    fn log_fps(&mut self) {
        self.frame_counter += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_fps_print).as_secs_f32();
        if elapsed >= 1.0 {
            log::info!("FPS: {:.1}", self.frame_counter as f32 / elapsed);
            self.frame_counter = 0;
            self.last_fps_print = now;
        }
    }

    fn on_mouse_button(&mut self, state: ElementState) {
        let (x, y) = self.cursor;
        match state {
            ElementState::Pressed => {
                for slider in [&mut self.fov_slider, &mut self.rays_slider] {
                    let before = slider.value();
                    slider.click(x, y);
                    log_slider_change(slider, before);
                }
            }
            ElementState::Released => {
                self.fov_slider.release();
                self.rays_slider.release();
            }
        }
    }

    fn on_cursor_moved(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
        for slider in [&mut self.fov_slider, &mut self.rays_slider] {
            let before = slider.value();
            slider.drag(x, y);
            log_slider_change(slider, before);
        }
    }
}

fn log_slider_change(slider: &Slider, before: u32) {
    let after = slider.value();
    if after != before {
        log::info!("{}: {}", slider.name, after);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_surface(event_loop) {
            log::error!("{e:#}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("The close button was pressed; stopping");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => {
                    self.keys_down.insert(code);
                }
                ElementState::Released => {
                    self.keys_down.remove(&code);
                }
            },

            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as i32, position.y as i32);
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.on_mouse_button(state),

            WindowEvent::RedrawRequested => {
                self.tick();
                self.draw();
                self.present(id);
                self.log_fps();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
