//! GPU rendering system
//!
//! Owns the render context and the per-frame clear/present path. Display
//! state derived from the scene (background color, camera mirror flag) is
//! cached here and refreshed when the scene reports dirty nodes.

use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use touchstone_render::{ContextError, RenderContext};
use touchstone_scene::{NodeKey, World};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    clear_color: wgpu::Color,
    mirror_vertical: bool,
}

impl RenderSystem {
    /// Create the render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        Ok(Self {
            context,
            clear_color: wgpu::Color::BLACK,
            mirror_vertical: false,
        })
    }

    /// Refresh cached display state from the scene
    ///
    /// Called when the world reports dirty nodes; picks up the background
    /// color and the camera's mirror flag.
    pub fn sync_scene(&mut self, world: &World, camera: Option<NodeKey>) {
        let bg = world.background();
        self.clear_color = wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        };
        if let Some(camera) = camera.and_then(|key| world.camera(key)) {
            self.mirror_vertical = camera.mirror_vertical;
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.context.resize(size);
    }

    /// Re-apply the swap interval; used after fullscreen transitions
    pub fn set_vsync(&mut self, vsync: bool) {
        self.context.set_vsync(vsync);
    }

    /// Render a single frame: clear to the scene background and present
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    /// Whether the output is vertically mirrored
    pub fn mirror_vertical(&self) -> bool {
        self.mirror_vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
