use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{GRID_COUNT, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::gpu::{GpuContext, QuadBatch, QuadPipeline};
use crate::render::{self, Viewport};
use crate::simulation::{ControlEvent, Scene};

/// Application state driving the animation from the winit event loop.
pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    pipeline: Option<QuadPipeline>,
    viewport: Option<Viewport>,
    scene: Scene,
    batch: QuadBatch,
    /// The startup backdrop paints once, and the accumulation texture gets
    /// its only clear, on the first frame.
    first_frame: bool,
    /// Whether increase/decrease has ever fired since the last restart.
    /// Presentational only; mirrored into the window title.
    direction_chosen: bool,
    fps_counter: FpsCounter,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            pipeline: None,
            viewport: None,
            scene: Scene::new(GRID_COUNT),
            batch: QuadBatch::new(),
            first_frame: true,
            direction_chosen: false,
            fps_counter: FpsCounter::new(),
        }
    }

    fn frame(&mut self) {
        let viewport = self.viewport.unwrap();

        self.scene.advance_frame();

        self.batch.begin_frame();
        if self.first_frame {
            render::paint_backdrop(viewport, &mut self.batch);
        }
        render::paint_frame(
            self.scene.grid(),
            self.scene.controls(),
            viewport,
            &mut self.batch,
        );

        let gpu = self.gpu.as_ref().unwrap();
        let pipeline = self.pipeline.as_mut().unwrap();

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        pipeline.encode(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &view,
            self.batch.instances(),
        );

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.first_frame = false;

        if let Some(fps) = self.fps_counter.tick() {
            let status = self.status_suffix();
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} FPS - {}", WINDOW_TITLE, fps, status));
            }
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        let event = match key_code {
            KeyCode::Equal | KeyCode::NumpadAdd => Some(ControlEvent::Increase),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(ControlEvent::Decrease),
            KeyCode::KeyF => Some(ControlEvent::Reverse),
            KeyCode::Space => Some(ControlEvent::TogglePause),
            KeyCode::KeyC => Some(ControlEvent::Carnage),
            KeyCode::KeyR => Some(ControlEvent::Restart),
            _ => None,
        };

        let Some(event) = event else {
            return;
        };

        self.scene.dispatch(event);
        match event {
            ControlEvent::Increase | ControlEvent::Decrease => self.direction_chosen = true,
            ControlEvent::Restart => {
                self.direction_chosen = false;
                log::info!(
                    "Restarted: {} points, noise seed {}",
                    self.scene.grid().points.len(),
                    self.scene.noise_seed()
                );
            }
            _ => {}
        }
        log::info!("{:?} -> {}", event, self.status_suffix());
    }

    /// Human-readable control status for the window title. Until a
    /// direction is chosen it shows the onboarding hint instead.
    fn status_suffix(&self) -> String {
        if !self.direction_chosen {
            return "press +/- to begin".to_string();
        }

        let controls = self.scene.controls();
        let motion = if controls.alteration > 0.0 {
            "forward"
        } else if controls.alteration < 0.0 {
            "reverse"
        } else {
            "paused"
        };
        if controls.carnage {
            format!("{} [carnage]", motion)
        } else {
            motion.to_string()
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Initializing noise grid...");
        log::info!("Lattice resolution: {0}x{0}", GRID_COUNT);
        log::info!("Points retained: {}", self.scene.grid().points.len());

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()));

        // The paint viewport is fixed here; later resizes only touch the
        // swapchain.
        let viewport = Viewport::new(gpu.config.width, gpu.config.height);

        log::info!("Creating render pipeline...");
        let pipeline = QuadPipeline::new(&gpu.device, gpu.format(), gpu.config.width, gpu.config.height);

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  +/-: start altering forward/backward");
        log::info!("  F: flip alteration direction");
        log::info!("  Space: pause/resume");
        log::info!("  C: carnage mode (until restart)");
        log::info!("  R: restart");
        log::info!("  Escape: quit");

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.pipeline = Some(pipeline);
        self.viewport = Some(viewport);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                // Key repeat would retrigger the toggles; controls fire on
                // discrete presses only.
                if event.state.is_pressed() && !event.repeat {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                        }
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if self.gpu.is_some() {
                    self.frame();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Simple FPS counter; reports once a second.
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
