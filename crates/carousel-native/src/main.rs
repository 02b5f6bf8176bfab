use std::path::PathBuf;
use std::time::Instant;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use carousel_core::assets::{load_texture_set, TextureSet};
use carousel_core::dispatcher::ClickOutcome;
use carousel_core::mesh::{InstanceRaw, SceneUniforms};
use carousel_core::render::PanelRenderer;
use carousel_core::{Coordinator, SceneConfig};
use glam::Vec2;

// winit reports wheel lines; one line scrolls this many pixels.
const LINE_HEIGHT_PX: f32 = 100.0 / 6.0;
const MAX_FRAME_DT_SEC: f32 = 0.1;
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    panels: PanelRenderer,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, textures: &TextureSet) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let panels = PanelRenderer::new(&device, &queue, format, textures)?;

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            panels,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(
        &mut self,
        uniforms: &SceneUniforms,
        instances: &[InstanceRaw],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.panels.render(
            &self.device,
            &self.queue,
            &view,
            CLEAR_COLOR,
            uniforms,
            instances,
        );
        frame.present();
        Ok(())
    }
}

fn cursor_ndc(position: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Vec2 {
    let w = size.width.max(1) as f32;
    let h = size.height.max(1) as f32;
    Vec2::new(
        (position.x as f32 / w) * 2.0 - 1.0,
        -(position.y as f32 / h) * 2.0 + 1.0,
    )
}

// winit: positive y scrolls up; the controller expects DOM-style deltas.
fn wheel_delta_px(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

fn load_textures(config: &SceneConfig) -> carousel_core::Result<TextureSet> {
    let uris = config.texture_uris();
    log::info!("[assets] reading {} images from {}", uris.len(), config.asset_base);
    pollster::block_on(load_texture_set(
        &uris,
        config.layer_size,
        |path| async move { std::fs::read(PathBuf::from(path)) },
    ))
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let asset_dir = std::env::args().nth(1).unwrap_or_else(|| "assets".to_string());
    let config = SceneConfig::default().with_asset_base(asset_dir);
    let textures = load_textures(&config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Panel Carousel (native)")
        .with_inner_size(PhysicalSize::new(1280u32, 800u32))
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut coordinator = Coordinator::new(
        &config,
        textures.len(),
        size.width as f32 / size.height.max(1) as f32,
        config.virtual_scroll_limit(size.height as f32),
    )?;
    let mut state = pollster::block_on(GpuState::new(&window, &textures))?;
    drop(textures);

    coordinator.start();
    let mut last_frame = Instant::now();
    let mut pointer_ndc = Vec2::ZERO;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            coordinator.resize(
                size.width,
                size.height,
                config.virtual_scroll_limit(size.height as f32),
            );
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            pointer_ndc = cursor_ndc(position, state.window.inner_size());
            coordinator.on_pointer_move(pointer_ndc);
        }
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                },
            ..
        } => match coordinator.on_click(pointer_ndc) {
            ClickOutcome::AutoScroll { target } => {
                log::info!("[click] auto-scroll to {:.0}", target)
            }
            ClickOutcome::Ignored(reason) => log::debug!("[click] ignored: {:?}", reason),
        },
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => coordinator.on_wheel(wheel_delta_px(delta)),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            coordinator.teardown();
            log::info!("[lifecycle] teardown");
            elwt.exit();
        }
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_sec = (now - last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
            last_frame = now;
            let report = coordinator.tick(dt_sec);
            if report.scroll.is_some_and(|s| s.canceled_auto_scroll) {
                log::info!("[scroll] user reversal canceled auto-scroll");
            }
            match state.render(&coordinator.uniforms(), &coordinator.instances()) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_corners_map_to_ndc_extremes() {
        let size = PhysicalSize::new(800u32, 600u32);
        let tl = cursor_ndc(PhysicalPosition::new(0.0, 0.0), size);
        let br = cursor_ndc(PhysicalPosition::new(800.0, 600.0), size);
        let mid = cursor_ndc(PhysicalPosition::new(400.0, 300.0), size);
        assert_eq!(tl, Vec2::new(-1.0, 1.0));
        assert_eq!(br, Vec2::new(1.0, -1.0));
        assert!(mid.length() < 1e-6);
    }

    #[test]
    fn wheel_down_is_positive() {
        assert!(wheel_delta_px(MouseScrollDelta::LineDelta(0.0, -1.0)) > 0.0);
        assert_eq!(
            wheel_delta_px(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 30.0))),
            -30.0
        );
    }
}
