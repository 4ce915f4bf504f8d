//! Touchstone - a haptics-and-graphics demo workbench
//!
//! Opens a window, builds a scene with one touchable torus, and drives a
//! per-frame render. The torus stiffness is scaled to what the configured
//! haptic device can render.

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use touchstone::config::AppConfig;
use touchstone::input::{InputAction, InputMapper};
use touchstone::scene::{DemoScene, SceneBuilder};
use touchstone::systems::{RenderError, RenderSystem, WindowSystem};
use touchstone_haptics::{DeviceCapabilities, WorkspaceMapping};
use touchstone_scene::{Material, Transform};

/// Main application state
///
/// This is the shared display/session record: configuration, window and
/// render systems (set only after successful init), and the built scene.
/// Everything here is touched from the event-loop thread only.
struct App {
    config: AppConfig,
    scene: DemoScene,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        // Resolve the haptic device and how stiff the demo object may be
        let caps = DeviceCapabilities::from_name(&config.haptics.device).unwrap_or_else(|e| {
            log::warn!("{}. Falling back to the Falcon preset.", e);
            DeviceCapabilities::FALCON
        });
        let mapping = WorkspaceMapping::for_device(&caps, config.haptics.workspace_radius)
            .unwrap_or_else(|e| {
                log::warn!("{}. Using an unscaled workspace.", e);
                // Identity mapping; radii equal so the ratio is 1
                WorkspaceMapping::for_device(&caps, caps.workspace_radius)
                    .expect("device presets have positive workspace radii")
            });
        let max_stiffness = mapping.max_renderable_stiffness(&caps);
        let stiffness = config.haptics.stiffness_ratio * max_stiffness;

        log::info!(
            "Haptic device '{}': workspace scale {:.1}, max renderable stiffness {:.1} N/m",
            config.haptics.device,
            mapping.scale_factor(),
            max_stiffness
        );

        let scene = Self::build_scene(&config, stiffness);
        log::info!(
            "Built scene with {} nodes, stereo mode {:?}",
            scene.world.node_count(),
            config.display.stereo_mode
        );

        Self {
            config,
            scene,
            window_system: None,
            render_system: None,
        }
    }

    /// Build the demo scene from config
    fn build_scene(config: &AppConfig, stiffness: f32) -> DemoScene {
        // The torus ring faces the camera on +X after a 90 degree turn
        // about the global Y axis
        let mut torus_transform = Transform::identity();
        torus_transform.rotate_about_axis_deg(Vec3::Y, 90.0);

        SceneBuilder::new()
            .with_background(config.rendering.background_color)
            .add_camera(
                Vec3::from_array(config.camera.eye),
                Vec3::from_array(config.camera.target),
                Vec3::from_array(config.camera.up),
                config.camera.near,
                config.camera.far,
            )
            .with_stereo(
                config.display.stereo_mode,
                config.camera.eye_separation,
                config.camera.focal_length,
                config.display.mirrored,
            )
            .add_headlamp(
                Vec3::from_array(config.lighting.position),
                Vec3::from_array(config.lighting.direction),
                config.lighting.cutoff_deg,
                config.lighting.shadows,
                config.lighting.shadow_quality,
            )
            .add_torus(
                "torus",
                0.24,
                0.50,
                Material::POLISHED_WHITE.with_stiffness(stiffness),
                torus_transform,
            )
            .with_surface_effect()
            .build()
    }

    /// Toggle the camera's vertical mirror flag
    fn toggle_mirror(&mut self) {
        if let Some(camera) = self
            .scene
            .camera
            .and_then(|key| self.scene.world.camera_mut(key))
        {
            camera.mirror_vertical = !camera.mirror_vertical;
            log::info!(
                "Mirrored display: {}",
                if camera.mirror_vertical { "ON" } else { "OFF" }
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(ws) => ws,
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mut render_system =
            match RenderSystem::new(window_system.window().clone(), self.config.window.vsync) {
                Ok(rs) => rs,
                Err(e) => {
                    log::error!("Failed to create render context: {}", e);
                    event_loop.exit();
                    return;
                }
            };

        render_system.sync_scene(&self.scene.world, self.scene.camera);
        self.scene.world.clear_all_dirty();

        window_system.request_redraw();
        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ws) = &mut self.window_system {
                    ws.record_resize(physical_size);
                }
                if let Some(rs) = &mut self.render_system {
                    rs.resize(physical_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                        }
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(ws) = &mut self.window_system {
                                ws.toggle_fullscreen();
                            }
                            // Re-apply the swap interval after the mode change
                            if let Some(rs) = &mut self.render_system {
                                rs.set_vsync(self.config.window.vsync);
                            }
                        }
                        Some(InputAction::ToggleMirror) => {
                            self.toggle_mirror();
                        }
                        None => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if self.scene.world.has_dirty_nodes() {
                    if let Some(rs) = &mut self.render_system {
                        rs.sync_scene(&self.scene.world, self.scene.camera);
                    }
                    self.scene.world.clear_all_dirty();
                }

                if let Some(rs) = &mut self.render_system {
                    match rs.render_frame() {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            let size = self
                                .window_system
                                .as_ref()
                                .map(|ws| ws.size())
                                .unwrap_or(rs.size());
                            rs.resize(size);
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Render error: {}", e);
                        }
                    }
                }

                if let Some(ws) = &self.window_system {
                    ws.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting touchstone");

    // Create event loop
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to initialize event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
