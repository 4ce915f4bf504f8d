//! Window management system
//!
//! Handles window creation, monitor-derived placement, resize bookkeeping,
//! and the fullscreen toggle.

use std::sync::Arc;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};

use crate::config::WindowConfig;

/// Compute the windowed rectangle for a monitor of the given size
///
/// The window takes 80% of the monitor height as its width and 50% as its
/// height, centered on the monitor.
pub fn windowed_rect(monitor: PhysicalSize<u32>) -> (PhysicalSize<u32>, PhysicalPosition<i32>) {
    let width = (0.8 * monitor.height as f32) as u32;
    let height = (0.5 * monitor.height as f32) as u32;
    let x = (monitor.width.saturating_sub(width) / 2) as i32;
    let y = (monitor.height.saturating_sub(height) / 2) as i32;
    (PhysicalSize::new(width, height), PhysicalPosition::new(x, y))
}

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    size: PhysicalSize<u32>,
    position: PhysicalPosition<i32>,
    fullscreen: bool,
}

impl WindowSystem {
    /// Create the window from config, sized and placed from the primary monitor
    ///
    /// Falls back to the config width/height (placed by the window manager)
    /// when no primary monitor is reported.
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes().with_title(&config.title);

        let position = match event_loop.primary_monitor() {
            Some(monitor) => {
                let (size, position) = windowed_rect(monitor.size());
                attrs = attrs.with_inner_size(size).with_position(position);
                position
            }
            None => {
                log::warn!("No primary monitor reported; using configured window size");
                attrs = attrs
                    .with_inner_size(PhysicalSize::new(config.width, config.height));
                PhysicalPosition::new(0, 0)
            }
        };

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        // Re-query: the window manager may not honor the requested size
        let size = window.inner_size();

        Ok(Self {
            window,
            size,
            position,
            fullscreen: config.fullscreen,
        })
    }

    /// Get window reference (for render context creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Latest recorded inner size
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Latest recorded windowed position
    pub fn position(&self) -> PhysicalPosition<i32> {
        self.position
    }

    /// Record a resize event
    pub fn record_resize(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
    }

    /// Check if the window is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Toggle fullscreen mode
    ///
    /// Restoring from fullscreen recomputes the windowed rectangle from the
    /// current monitor and re-centers the window.
    pub fn toggle_fullscreen(&mut self) {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
            if let Some(monitor) = self.window.current_monitor() {
                let (size, position) = windowed_rect(monitor.size());
                if let Some(actual) = self.window.request_inner_size(size) {
                    self.size = actual;
                } else {
                    self.size = size;
                }
                self.window.set_outer_position(position);
                self.position = position;
            }
            self.fullscreen = false;
        } else {
            self.window
                .set_fullscreen(Some(Fullscreen::Borderless(None)));
            self.fullscreen = true;
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windowed_rect_proportions() {
        // 1920x1080 monitor: window is 864x540, centered
        let (size, pos) = windowed_rect(PhysicalSize::new(1920, 1080));
        assert_eq!(size.width, 864);
        assert_eq!(size.height, 540);
        assert_eq!(pos.x, (1920 - 864) / 2);
        assert_eq!(pos.y, (1080 - 540) / 2);
    }

    #[test]
    fn test_windowed_rect_centered() {
        let monitor = PhysicalSize::new(2560, 1440);
        let (size, pos) = windowed_rect(monitor);
        assert_eq!(pos.x as u32 * 2 + size.width, monitor.width);
        assert_eq!(pos.y as u32 * 2 + size.height, monitor.height);
    }

    #[test]
    fn test_windowed_rect_tall_monitor() {
        // A rotated monitor where 0.8 * height exceeds the width:
        // position saturates to 0 instead of going negative
        let (size, pos) = windowed_rect(PhysicalSize::new(1080, 1920));
        assert_eq!(size.width, 1536);
        assert_eq!(pos.x, 0);
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(format!("{}", err), "Window creation failed: no display");
    }
}
